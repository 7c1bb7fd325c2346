//! Root application component, context providers, and navigation glue.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the three context signals (router, session, UI chrome) and
//! mounts all six view panels in fixed containers; the router marks exactly
//! one active. The first navigation waits for the session probe so the auth
//! policy never acts on unknown session state, and every later navigation
//! re-resolves against the state current at that moment.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::components::notification::NotificationToast;
use crate::pages::admin::AdminPage;
use crate::pages::auth::AuthPage;
use crate::pages::cart::CartPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::profile::ProfilePage;
use crate::pages::vuln::VulnPage;
use crate::state::router::{RouterState, View};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let router = RwSignal::new(RouterState::default());
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(router);
    provide_context(session);
    provide_context(ui);

    // Probe the session once, then run the initial navigation from the URL
    // fragment (default catalog). Navigation never acts on stale state.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            refresh_session(session).await;
            refresh_cart_badge(ui).await;
            let requested = View::from_fragment(&crate::util::location::read_fragment());
            go_to(router, session, requested);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/vulnshop.css"/>
        <Title text="Vulnerable Shop"/>

        <NavBar/>
        <NotificationToast/>
        <main class="views">
            <ViewPanel view=View::Catalog>
                <CatalogPage/>
            </ViewPanel>
            <ViewPanel view=View::Cart>
                <CartPage/>
            </ViewPanel>
            <ViewPanel view=View::Vuln>
                <VulnPage/>
            </ViewPanel>
            <ViewPanel view=View::Auth>
                <AuthPage/>
            </ViewPanel>
            <ViewPanel view=View::Profile>
                <ProfilePage/>
            </ViewPanel>
            <ViewPanel view=View::Admin>
                <AdminPage/>
            </ViewPanel>
        </main>
    }
}

/// Fixed container for one view. All six stay mounted; the router class
/// toggles visibility so loaders can only ever write into their own panel.
#[component]
fn ViewPanel(view: View, children: Children) -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    view! {
        <section
            id=format!("view-{}", view.fragment())
            class="view"
            class:active=move || router.get().active == view
        >
            {children()}
        </section>
    }
}

/// Navigate to `requested`, resolving against the session state at call
/// time, and sync the location fragment to the *resolved* view.
pub fn go_to(
    router: RwSignal<RouterState>,
    session: RwSignal<SessionState>,
    requested: View,
) -> View {
    let current = session.get_untracked();
    let mut resolved = View::Catalog;
    router.update(|r| resolved = r.navigate(requested, &current));
    crate::util::location::write_fragment(resolved.fragment());
    resolved
}

/// Replace the whole session state from the auth probe. A failed probe
/// resets to the logged-out default rather than keeping stale fields.
#[cfg(feature = "hydrate")]
pub async fn refresh_session(session: RwSignal<SessionState>) {
    let next = match crate::net::api::fetch_session().await {
        Ok(state) => state,
        Err(err) => {
            log::warn!("session probe failed: {err}");
            SessionState::default()
        }
    };
    session.set(next);
}

/// Refresh the nav-bar badge from the authoritative server cart. While
/// logged out the cart endpoint answers 401 and the badge shows zero.
#[cfg(feature = "hydrate")]
pub async fn refresh_cart_badge(ui: RwSignal<UiState>) {
    let count = match crate::net::api::fetch_cart().await {
        Ok(lines) => crate::state::cart::item_count(&lines),
        Err(_) => 0,
    };
    ui.update(|u| u.cart_count = count);
}

/// Raise a toast that dismisses itself after three seconds unless a newer
/// toast has replaced it.
pub fn notify(ui: RwSignal<UiState>, message: &str) {
    let mut token = 0;
    ui.update(|u| token = u.show_toast(message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
            ui.update(|u| u.dismiss_toast(token));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
