//! URL fragment read/write for the view router.
//!
//! The fragment is the only piece of routing state the browser owns: it is
//! read once at startup to pick the initial view and written after every
//! `navigate` with the *resolved* view. Requires a browser environment;
//! SSR paths no-op.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Strip the leading `#` from a raw `location.hash` value.
pub fn strip_hash(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

/// Current URL fragment without the `#`, empty outside a browser.
pub fn read_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().hash() {
            Ok(hash) => strip_hash(&hash).to_owned(),
            Err(_) => String::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Point the location indicator at `fragment` (no page reload).
pub fn write_fragment(fragment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(fragment);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fragment;
    }
}
