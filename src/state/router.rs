//! Hash-fragment view router with session-aware substitution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront is a single page with six fixed panels; exactly one is
//! active at a time. `navigate` re-resolves the requested view against the
//! session state *at call time*, so a login or logout that lands between a
//! click and its handling always governs the outcome. The location fragment
//! is written with the resolved view, never the requested one — a stale
//! `#profile` bookmark while logged out stabilizes at `#auth`.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::session::SessionState;

/// The closed set of views the storefront can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Catalog,
    Cart,
    Vuln,
    Auth,
    Profile,
    Admin,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Catalog,
        View::Cart,
        View::Vuln,
        View::Auth,
        View::Profile,
        View::Admin,
    ];

    /// URL fragment identifier for this view.
    pub fn fragment(self) -> &'static str {
        match self {
            View::Catalog => "catalog",
            View::Cart => "cart",
            View::Vuln => "vuln",
            View::Auth => "auth",
            View::Profile => "profile",
            View::Admin => "admin",
        }
    }

    /// Parse a URL fragment, failing closed to `Catalog` on anything
    /// unrecognized (stale bookmarks, garbled hashes, empty fragments).
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment {
            "cart" => View::Cart,
            "vuln" => View::Vuln,
            "auth" => View::Auth,
            "profile" => View::Profile,
            "admin" => View::Admin,
            _ => View::Catalog,
        }
    }

    /// Views that only make sense with a logged-in session. The backend
    /// still authorizes their content; this gate only shapes navigation.
    pub fn requires_auth(self) -> bool {
        matches!(self, View::Cart | View::Profile | View::Admin)
    }
}

/// Substitute the requested view per the session policy: auth-only views
/// fall back to `Auth` while logged out, and `Auth` itself is skipped in
/// favor of `Profile` once logged in.
pub fn resolve(requested: View, session: &SessionState) -> View {
    if requested.requires_auth() && !session.authenticated {
        return View::Auth;
    }
    if requested == View::Auth && session.authenticated {
        return View::Profile;
    }
    requested
}

/// Active view plus a monotonically increasing navigation generation.
///
/// The generation tags in-flight loader responses so that a response landing
/// after a newer navigation is discarded instead of overwriting the panel
/// (loaders are never cancelled; they are simply ignored once stale).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub active: View,
    pub generation: u64,
}

impl RouterState {
    /// Resolve `requested` against `session`, activate the result, and
    /// advance the generation. Returns the resolved view so the caller can
    /// update the location fragment to match.
    pub fn navigate(&mut self, requested: View, session: &SessionState) -> View {
        let resolved = resolve(requested, session);
        self.active = resolved;
        self.generation = self.generation.wrapping_add(1);
        resolved
    }

    /// Whether a loader response tagged with `token` for `view` may still
    /// write its panel. Both the view and the generation must match.
    pub fn accepts(&self, view: View, token: u64) -> bool {
        self.active == view && self.generation == token
    }
}
