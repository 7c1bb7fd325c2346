use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_fully_logged_out() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert_eq!(state.user_id, None);
    assert_eq!(state.email, None);
    assert!(!state.is_admin);
}

// =============================================================
// Probe payload parsing
// =============================================================

#[test]
fn parses_authenticated_probe_payload() {
    let json = r#"{
        "authenticated": true,
        "user_id": 7,
        "email": "alice@example.com",
        "is_admin": false
    }"#;
    let state: SessionState = serde_json::from_str(json).unwrap();
    assert!(state.authenticated);
    assert_eq!(state.user_id, Some(7));
    assert_eq!(state.email.as_deref(), Some("alice@example.com"));
    assert!(!state.is_admin);
}

#[test]
fn parses_admin_probe_payload() {
    let json = r#"{"authenticated": true, "user_id": 1, "email": "admin@shop.local", "is_admin": true}"#;
    let state: SessionState = serde_json::from_str(json).unwrap();
    assert!(state.authenticated);
    assert!(state.is_admin);
}

#[test]
fn parses_unauthenticated_probe_payload_without_email() {
    // The backend omits `email` entirely when not logged in.
    let json = r#"{"authenticated": false, "user_id": null, "is_admin": false}"#;
    let state: SessionState = serde_json::from_str(json).unwrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn parses_empty_object_as_logged_out() {
    let state: SessionState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn rejects_non_object_body() {
    assert!(serde_json::from_str::<SessionState>("\"nope\"").is_err());
    assert!(serde_json::from_str::<SessionState>("<h1>502</h1>").is_err());
}

// =============================================================
// Wholesale replacement semantics
// =============================================================

#[test]
fn replacing_state_drops_all_previous_fields() {
    let logged_in = SessionState {
        authenticated: true,
        user_id: Some(1),
        email: Some("admin@shop.local".to_owned()),
        is_admin: true,
    };
    // A failed probe replaces the whole value; no field survives.
    let after_failed_probe = SessionState::default();
    assert_ne!(logged_in, after_failed_probe);
    assert!(!after_failed_probe.is_admin);
    assert_eq!(after_failed_probe.email, None);
}
