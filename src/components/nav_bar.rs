//! Top navigation bar: view buttons, cart badge, and session controls.
//!
//! DESIGN
//! ======
//! Buttons request views; the router decides what actually activates, so an
//! unauthenticated click on Cart lands on the auth panel without the nav
//! bar knowing the policy. The Admin button is only offered to admins, but
//! hiding it is cosmetic: panel content authorization stays server-side.

use leptos::prelude::*;

use crate::state::router::{RouterState, View};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let nav = move |requested: View| {
        crate::app::go_to(router, session, requested);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::logout().await {
                    log::warn!("logout failed: {err}");
                }
                // Re-probe before the next navigation decision.
                crate::app::refresh_session(session).await;
                crate::app::refresh_cart_badge(ui).await;
                crate::app::go_to(router, session, View::Catalog);
            });
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Vulnerable Shop"</span>
            <button class="nav-bar__link" on:click=move |_| nav(View::Catalog)>
                "Catalog"
            </button>
            <button class="nav-bar__link" on:click=move |_| nav(View::Cart)>
                {move || format!("Cart ({})", ui.get().cart_count)}
            </button>
            <button class="nav-bar__link" on:click=move |_| nav(View::Vuln)>
                "Attack Playground"
            </button>
            <Show when=move || session.get().is_admin>
                <button class="nav-bar__link" on:click=move |_| nav(View::Admin)>
                    "Admin"
                </button>
            </Show>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.get().authenticated
                fallback=move || {
                    view! {
                        <button class="nav-bar__link" on:click=move |_| nav(View::Auth)>
                            "Login"
                        </button>
                    }
                }
            >
                <button class="nav-bar__link" on:click=move |_| nav(View::Profile)>
                    {move || session.get().email.unwrap_or_else(|| "Profile".to_owned())}
                </button>
                <button class="nav-bar__link" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
