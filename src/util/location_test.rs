use super::*;

// =============================================================
// strip_hash
// =============================================================

#[test]
fn strips_a_leading_hash() {
    assert_eq!(strip_hash("#cart"), "cart");
}

#[test]
fn passes_through_without_a_hash() {
    assert_eq!(strip_hash("profile"), "profile");
}

#[test]
fn empty_hash_yields_empty_fragment() {
    assert_eq!(strip_hash("#"), "");
    assert_eq!(strip_hash(""), "");
}
