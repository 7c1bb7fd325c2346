use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_empty_badge_and_no_toast() {
    let state = UiState::default();
    assert_eq!(state.cart_count, 0);
    assert_eq!(state.notification, None);
}

// =============================================================
// Toast lifecycle
// =============================================================

#[test]
fn show_toast_sets_the_notification() {
    let mut state = UiState::default();
    state.show_toast("Product added to cart!");
    assert_eq!(state.notification.as_deref(), Some("Product added to cart!"));
}

#[test]
fn dismiss_with_matching_token_clears_the_toast() {
    let mut state = UiState::default();
    let token = state.show_toast("Order placed!");
    state.dismiss_toast(token);
    assert_eq!(state.notification, None);
}

#[test]
fn stale_dismiss_does_not_clear_a_newer_toast() {
    let mut state = UiState::default();
    let old = state.show_toast("first");
    state.show_toast("second");
    state.dismiss_toast(old);
    assert_eq!(state.notification.as_deref(), Some("second"));
}
