//! Toast overlay for transient cart/order feedback.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Renders the current toast, if any. Dismissal is driven by the timer
/// started in [`crate::app::notify`].
#[component]
pub fn NotificationToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().notification.is_some()>
            <div class="notification">
                {move || ui.get().notification.unwrap_or_default()}
            </div>
        </Show>
    }
}
