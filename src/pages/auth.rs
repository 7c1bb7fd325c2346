//! Auth panel: login and registration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login re-probes the session *before* navigating, so the
//! router policy acts on fresh state — if the probe fails right after
//! login, the `Profile` request resolves back to this panel instead of
//! showing a half-authenticated view. Registration echoes the backend's
//! raw response (the training exercise inspects those messages).

use leptos::prelude::*;

use crate::state::router::{RouterState, View};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn AuthPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let login_msg = RwSignal::new(String::new());
    let register_email = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());
    let register_msg = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = login_email.get().trim().to_owned();
        let password = login_password.get();
        if email.is_empty() || password.is_empty() {
            login_msg.set("Enter email and password.".to_owned());
            return;
        }
        busy.set(true);
        login_msg.set("Logging in...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email, &password).await {
                    Ok(()) => {
                        crate::app::refresh_session(session).await;
                        crate::app::refresh_cart_badge(ui).await;
                        login_msg.set(String::new());
                        crate::app::go_to(router, session, View::Profile);
                    }
                    Err(err) => login_msg.set(format!("Login failed: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, router, session, ui);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = register_email.get().trim().to_owned();
        let password = register_password.get();
        if email.is_empty() || password.is_empty() {
            register_msg.set("Enter email and password.".to_owned());
            return;
        }
        busy.set(true);
        register_msg.set("Registering...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&email, &password).await {
                    Ok(resp) => register_msg.set(format!("Response: {} {}", resp.status, resp.body)),
                    Err(err) => register_msg.set(format!("Error: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    };

    view! {
        <h1>"Login / Registration"</h1>
        <div class="auth-layout">
            <form class="panel" on:submit=on_login>
                <h2>"Login"</h2>
                <label>
                    "Email"
                    <input
                        type="text"
                        prop:value=move || login_email.get()
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || login_password.get()
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <p class="hint">"Backend login is intentionally vulnerable to SQL injection."</p>
                <div class="msg">{move || login_msg.get()}</div>
            </form>
            <form class="panel" on:submit=on_register>
                <h2>"Registration"</h2>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || register_email.get()
                        on:input=move |ev| register_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || register_password.get()
                        on:input=move |ev| register_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <div class="msg">{move || register_msg.get()}</div>
            </form>
        </div>
    }
}
