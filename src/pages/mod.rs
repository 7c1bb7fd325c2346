//! Panel modules, one per view.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its panel's load lifecycle: it re-fetches from scratch
//! whenever its view becomes active, writes only its own `PanelState`, and
//! folds every fetch failure into inline panel text so navigation is never
//! broken by a loader. Responses that outlive their navigation generation
//! are dropped.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod profile;
pub mod vuln;
