//! Profile panel: user record, order history, and avatar preview.

use leptos::prelude::*;

use crate::net::types::{Order, UserProfile};
use crate::state::panel::PanelState;
use crate::state::router::{RouterState, View};
use crate::util::format;

/// Everything the profile panel renders, fetched together on activation.
#[derive(Clone, Debug, PartialEq)]
struct ProfileModel {
    user: UserProfile,
    orders: Vec<Order>,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let panel = RwSignal::new(PanelState::<ProfileModel>::Loading);
    let avatar_url = RwSignal::new(String::new());
    let avatar_src = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = router.get();
        if state.active != View::Profile {
            return;
        }
        let token = state.generation;
        panel.set(PanelState::Loading);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let (user, orders) =
                    futures::join!(crate::net::api::fetch_profile(), crate::net::api::fetch_orders());
                if !router.get_untracked().accepts(View::Profile, token) {
                    return;
                }
                let result = match (user, orders) {
                    (Ok(user), Ok(orders)) => Ok(ProfileModel { user, orders }),
                    (Err(err), _) | (_, Err(err)) => {
                        log::warn!("profile load failed: {err}");
                        Err(err)
                    }
                };
                panel.set(PanelState::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_avatar = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = avatar_url.get().trim().to_owned();
        if url.is_empty() {
            return;
        }
        // The backend fetches the URL through its proxy chain; the client
        // only points an image at it.
        avatar_src.set(Some(crate::net::api::image_src(&url)));
    };

    view! {
        <h1>"Profile"</h1>
        {move || match panel.get() {
            PanelState::Loading => view! { <p>"Loading..."</p> }.into_any(),
            PanelState::Failed(err) => {
                view! { <p class="error">{format!("Failed to load profile: {err}")}</p> }
                    .into_any()
            }
            PanelState::Ready(model) => {
                view! {
                    <div class="profile-layout">
                        <div class="panel">
                            <h2>"User Information"</h2>
                            <p><strong>"ID: "</strong>{model.user.id}</p>
                            <p><strong>"Email: "</strong>{model.user.email.clone()}</p>
                            <p><strong>"is_admin: "</strong>{model.user.is_admin.to_string()}</p>
                        </div>
                        <div class="panel">
                            <h2>"Order History"</h2>
                            <OrderHistory orders=model.orders/>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
        <div class="panel">
            <h2>"Avatar Preview"</h2>
            <form on:submit=on_avatar>
                <label>
                    "Avatar URL"
                    <input
                        type="text"
                        placeholder="https://example.com/me.png"
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| avatar_url.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Fetch avatar"</button>
            </form>
            {move || {
                avatar_src
                    .get()
                    .map(|src| view! { <img class="avatar-preview" src=src alt="avatar"/> })
            }}
        </div>
    }
}

#[component]
fn OrderHistory(orders: Vec<Order>) -> impl IntoView {
    if orders.is_empty() {
        return view! { <p>"No orders yet"</p> }.into_any();
    }
    view! {
        <div class="order-history">
            {orders
                .into_iter()
                .map(|order| {
                    view! {
                        <div class="order-item">
                            <h4>{format!("Order #{}", order.id)}</h4>
                            <p>
                                <strong>"Date: "</strong>
                                {format::order_date(&order.created_at).to_owned()}
                            </p>
                            <p>
                                <strong>"Total: "</strong>
                                {format::price(u64::from(order.total_cents))}
                            </p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
