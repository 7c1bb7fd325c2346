//! Admin panel: backend report plus the add-product form.
//!
//! DESIGN
//! ======
//! The client routes any authenticated user here; whether the report shows
//! admin data or a 403 body is decided entirely server-side, and the panel
//! echoes whichever it gets.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::{EchoedResponse, NewProduct};
use crate::state::panel::PanelState;
use crate::state::router::{RouterState, View};

fn report_text(report: &EchoedResponse) -> String {
    format!("Response from /admin (status {}):\n{}", report.status, report.body)
}

fn parse_price_cents(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| "price_cents must be a non-negative integer".to_owned())
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let panel = RwSignal::new(PanelState::<EchoedResponse>::Loading);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let form_msg = RwSignal::new(String::new());

    Effect::new(move || {
        let state = router.get();
        if state.active != View::Admin {
            return;
        }
        let token = state.generation;
        panel.set(PanelState::Loading);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_admin().await;
                if !router.get_untracked().accepts(View::Admin, token) {
                    return;
                }
                panel.set(PanelState::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_add_product = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let price_cents = match parse_price_cents(&price.get()) {
            Ok(cents) => cents,
            Err(msg) => {
                form_msg.set(msg);
                return;
            }
        };
        let product = NewProduct {
            name: name.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            price_cents,
            image_url: image_url.get().trim().to_owned(),
        };
        if product.name.is_empty() || product.image_url.is_empty() {
            form_msg.set("name and image_url are required".to_owned());
            return;
        }
        form_msg.set("Sending...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::add_product(&product).await {
                    Ok(resp) => form_msg.set(format!("Response: {} {}", resp.status, resp.body)),
                    Err(err) => form_msg.set(format!("Error: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
        }
    };

    view! {
        <h1>"Admin panel"</h1>
        <div class="panel">
            {move || match panel.get() {
                PanelState::Loading => view! { <p>"Loading /admin..."</p> }.into_any(),
                PanelState::Failed(err) => {
                    view! { <p class="error">{format!("Error: {err}")}</p> }.into_any()
                }
                PanelState::Ready(report) => {
                    view! { <pre class="admin-report">{report_text(&report)}</pre> }.into_any()
                }
            }}
        </div>
        <form class="panel" on:submit=on_add_product>
            <h2>"Add product (POST /admin/add_product)"</h2>
            <label>
                "Name"
                <input
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <input
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Price (cents)"
                <input
                    type="number"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Image URL"
                <input
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Add product"</button>
            <p class="hint">"image_url is stored as provided and later fetched via the /image chain."</p>
            <div class="msg">{move || form_msg.get()}</div>
        </form>
    }
}
