//! Session state reported by the backend auth probe.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET /auth/status` returns this shape directly. The router consults it
//! on every navigation, so it must always be internally consistent:
//! the whole value is replaced on each probe/login/logout, and a failed
//! probe resets it to the logged-out default rather than leaving fields
//! half-updated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Login/authorization state for the current browser session.
///
/// `Default` is the fully logged-out state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub authenticated: bool,
    /// Backend user id when authenticated; the unauthenticated probe
    /// reports `null`.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Omitted entirely from the unauthenticated probe payload.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}
