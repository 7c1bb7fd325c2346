//! # vulnshop-client
//!
//! Leptos + WASM frontend for the deliberately-vulnerable demonstration
//! storefront used in security training. The backend (catalog storage,
//! auth/session issuance, the intentionally vulnerable proxy/preview/image
//! endpoints) is a separate service; this crate is the browser side only.
//!
//! The crate is organized around a hash-fragment view router (`state`),
//! per-panel fetch loaders (`net` + `pages`), and shared UI chrome
//! (`components`). All routing, session, and cart logic is plain Rust that
//! unit-tests without a live document.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered body into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
