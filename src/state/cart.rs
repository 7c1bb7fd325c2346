//! Cart arithmetic over the server-fetched projection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authoritative cart state lives server-side; the client only derives the
//! nav-bar badge count and the displayed total from lines it just fetched.
//! Totals are computed in `u64` so large carts cannot overflow the `u32`
//! unit prices.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::CartLine;

/// Total number of items across all lines (the nav-bar badge).
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Cart total in cents.
pub fn total_cents(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(|line| u64::from(line.price_cents) * u64::from(line.quantity))
        .sum()
}
