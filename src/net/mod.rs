//! Networking modules for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (hydrate-only, SSR paths stub out), and
//! `types` defines the DTOs mirroring the backend's JSON payloads.

pub mod api;
pub mod types;
