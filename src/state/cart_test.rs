use super::*;

use crate::net::types::CartLine;

// =============================================================
// Helpers
// =============================================================

fn line(product_id: i64, price_cents: u32, quantity: u32) -> CartLine {
    CartLine {
        id: product_id * 10,
        product_id,
        name: format!("product-{product_id}"),
        price_cents,
        image_url: "/image?url=http%3A%2F%2Fexample.com%2F1.jpg".to_owned(),
        quantity,
    }
}

// =============================================================
// item_count
// =============================================================

#[test]
fn empty_cart_has_zero_items() {
    assert_eq!(item_count(&[]), 0);
}

#[test]
fn item_count_sums_quantities_across_lines() {
    let lines = vec![line(1, 6300, 2), line(2, 7200, 1), line(3, 5999, 3)];
    assert_eq!(item_count(&lines), 6);
}

// =============================================================
// total_cents
// =============================================================

#[test]
fn empty_cart_total_is_zero() {
    assert_eq!(total_cents(&[]), 0);
}

#[test]
fn total_multiplies_unit_price_by_quantity() {
    let lines = vec![line(1, 6300, 2), line(2, 7200, 1)];
    assert_eq!(total_cents(&lines), 6300 * 2 + 7200);
}

#[test]
fn total_does_not_overflow_u32_prices() {
    let lines = vec![line(1, u32::MAX, 3)];
    assert_eq!(total_cents(&lines), u64::from(u32::MAX) * 3);
}
