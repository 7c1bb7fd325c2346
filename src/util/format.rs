//! Display formatting for prices and order timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a cent amount as `"63.00$"`, matching the storefront's price
/// labels.
pub fn price(cents: u64) -> String {
    format!("{}.{:02}$", cents / 100, cents % 100)
}

/// Date portion of an RFC 3339 timestamp; the raw string when it has no
/// time component.
pub fn order_date(created_at: &str) -> &str {
    created_at.split('T').next().unwrap_or(created_at)
}
