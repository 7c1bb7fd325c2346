//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome while reading/writing shared state
//! from Leptos context providers; panel content itself lives in `pages`.

pub mod nav_bar;
pub mod notification;
pub mod product_card;
