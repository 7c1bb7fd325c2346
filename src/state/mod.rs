//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`router`, `session`, `cart`, `ui`) so panels
//! can depend on small focused models. Each signal holds a whole value that
//! is replaced on update, never partially mutated in place.

pub mod cart;
pub mod panel;
pub mod router;
pub mod session;
pub mod ui;
