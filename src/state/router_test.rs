use super::*;

use crate::state::session::SessionState;

// =============================================================
// Helpers
// =============================================================

fn logged_out() -> SessionState {
    SessionState::default()
}

fn logged_in() -> SessionState {
    SessionState {
        authenticated: true,
        user_id: Some(7),
        email: Some("alice@example.com".to_owned()),
        is_admin: false,
    }
}

fn admin() -> SessionState {
    SessionState {
        authenticated: true,
        user_id: Some(1),
        email: Some("admin@shop.local".to_owned()),
        is_admin: true,
    }
}

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn fragment_round_trips_for_every_view() {
    for view in View::ALL {
        assert_eq!(View::from_fragment(view.fragment()), view);
    }
}

#[test]
fn unknown_fragment_fails_closed_to_catalog() {
    assert_eq!(View::from_fragment("checkout"), View::Catalog);
    assert_eq!(View::from_fragment("ADMIN"), View::Catalog);
    assert_eq!(View::from_fragment("profile%22"), View::Catalog);
}

#[test]
fn empty_fragment_defaults_to_catalog() {
    assert_eq!(View::from_fragment(""), View::Catalog);
}

// =============================================================
// Resolution policy
// =============================================================

#[test]
fn auth_only_views_redirect_to_auth_while_logged_out() {
    let session = logged_out();
    assert_eq!(resolve(View::Profile, &session), View::Auth);
    assert_eq!(resolve(View::Cart, &session), View::Auth);
    assert_eq!(resolve(View::Admin, &session), View::Auth);
}

#[test]
fn public_views_pass_through_while_logged_out() {
    let session = logged_out();
    assert_eq!(resolve(View::Catalog, &session), View::Catalog);
    assert_eq!(resolve(View::Vuln, &session), View::Vuln);
    assert_eq!(resolve(View::Auth, &session), View::Auth);
}

#[test]
fn auth_redirects_to_profile_while_logged_in() {
    assert_eq!(resolve(View::Auth, &logged_in()), View::Profile);
}

#[test]
fn auth_only_views_pass_through_while_logged_in() {
    let session = logged_in();
    assert_eq!(resolve(View::Profile, &session), View::Profile);
    assert_eq!(resolve(View::Cart, &session), View::Cart);
}

#[test]
fn admin_view_resolves_for_any_authenticated_user() {
    // Client routing does not gate on is_admin; the backend authorizes
    // the panel content itself.
    assert_eq!(resolve(View::Admin, &logged_in()), View::Admin);
    assert_eq!(resolve(View::Admin, &admin()), View::Admin);
}

#[test]
fn resolution_always_lands_inside_the_view_set() {
    for view in View::ALL {
        for session in [logged_out(), logged_in(), admin()] {
            let resolved = resolve(view, &session);
            assert!(View::ALL.contains(&resolved));
        }
    }
}

// =============================================================
// RouterState::navigate
// =============================================================

#[test]
fn navigate_activates_the_resolved_view() {
    let mut router = RouterState::default();
    let resolved = router.navigate(View::Cart, &logged_out());
    assert_eq!(resolved, View::Auth);
    assert_eq!(router.active, View::Auth);
}

#[test]
fn stale_cart_bookmark_while_logged_out_lands_on_auth() {
    let mut router = RouterState::default();
    let requested = View::from_fragment("cart");
    let resolved = router.navigate(requested, &logged_out());
    assert_eq!(resolved, View::Auth);
}

#[test]
fn navigate_is_idempotent_in_view_selection() {
    let mut router = RouterState::default();
    let session = logged_in();
    let first = router.navigate(View::Profile, &session);
    let second = router.navigate(View::Profile, &session);
    assert_eq!(first, second);
    assert_eq!(router.active, View::Profile);
}

#[test]
fn navigate_uses_session_state_at_call_time() {
    let mut router = RouterState::default();
    assert_eq!(router.navigate(View::Profile, &logged_in()), View::Profile);
    // Session expired (failed probe) before the next click lands.
    assert_eq!(router.navigate(View::Profile, &logged_out()), View::Auth);
}

#[test]
fn navigate_advances_the_generation_every_call() {
    let mut router = RouterState::default();
    let session = logged_out();
    let start = router.generation;
    router.navigate(View::Catalog, &session);
    router.navigate(View::Catalog, &session);
    assert_eq!(router.generation, start + 2);
}

// =============================================================
// Generation guard
// =============================================================

#[test]
fn accepts_current_view_and_generation() {
    let mut router = RouterState::default();
    router.navigate(View::Catalog, &logged_out());
    let token = router.generation;
    assert!(router.accepts(View::Catalog, token));
}

#[test]
fn rejects_stale_generation_after_renavigation() {
    let mut router = RouterState::default();
    router.navigate(View::Catalog, &logged_out());
    let stale = router.generation;
    router.navigate(View::Catalog, &logged_out());
    assert!(!router.accepts(View::Catalog, stale));
}

#[test]
fn rejects_response_for_an_inactive_view() {
    let mut router = RouterState::default();
    router.navigate(View::Catalog, &logged_out());
    let token = router.generation;
    router.navigate(View::Vuln, &logged_out());
    assert!(!router.accepts(View::Catalog, token));
}
