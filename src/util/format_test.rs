use super::*;

// =============================================================
// price
// =============================================================

#[test]
fn price_formats_whole_dollars() {
    assert_eq!(price(6300), "63.00$");
}

#[test]
fn price_pads_single_digit_cents() {
    assert_eq!(price(105), "1.05$");
}

#[test]
fn price_formats_sub_dollar_amounts() {
    assert_eq!(price(99), "0.99$");
    assert_eq!(price(0), "0.00$");
}

#[test]
fn price_handles_large_cart_totals() {
    assert_eq!(price(1_234_567), "12345.67$");
}

// =============================================================
// order_date
// =============================================================

#[test]
fn order_date_takes_the_date_portion() {
    assert_eq!(order_date("2026-08-29T10:15:00Z"), "2026-08-29");
}

#[test]
fn order_date_passes_through_plain_strings() {
    assert_eq!(order_date("2026-08-29"), "2026-08-29");
    assert_eq!(order_date(""), "");
}
