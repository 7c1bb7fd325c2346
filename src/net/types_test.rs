use super::*;

// =============================================================
// CatalogItem
// =============================================================

#[test]
fn catalog_item_parses_backend_shape() {
    let json = r#"{
        "id": 1,
        "name": "Faded Jeans",
        "description": "Classic Faded Jeans for everyday wear",
        "price_cents": 6300,
        "image_url": "/image?url=http://localhost:8080/local-image?id=1"
    }"#;
    let item: CatalogItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Faded Jeans");
    assert_eq!(item.price_cents, 6300);
}

#[test]
fn catalog_item_defaults_missing_description() {
    let json = r#"{"id": 9, "name": "Plain Tee", "price_cents": 100, "image_url": "/image?url=x"}"#;
    let item: CatalogItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.description, "");
}

#[test]
fn catalog_listing_parses_as_array() {
    let json = r#"[
        {"id": 1, "name": "A", "description": "", "price_cents": 100, "image_url": "/image?url=a"},
        {"id": 2, "name": "B", "description": "", "price_cents": 200, "image_url": "/image?url=b"}
    ]"#;
    let items: Vec<CatalogItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn catalog_item_rejects_malformed_body() {
    assert!(serde_json::from_str::<Vec<CatalogItem>>("<html>oops</html>").is_err());
    assert!(serde_json::from_str::<CatalogItem>(r#"{"id": "one"}"#).is_err());
}

// =============================================================
// CartLine
// =============================================================

#[test]
fn cart_line_parses_backend_shape() {
    let json = r#"{
        "id": 12,
        "product_id": 3,
        "name": "CHOCOOLATE Shoulder Tee",
        "price_cents": 5999,
        "image_url": "http://localhost:8080/local-image?id=3",
        "quantity": 2
    }"#;
    let line: CartLine = serde_json::from_str(json).unwrap();
    assert_eq!(line.id, 12);
    assert_eq!(line.product_id, 3);
    assert_eq!(line.quantity, 2);
}

#[test]
fn cart_line_rejects_negative_quantity() {
    let json = r#"{"id": 1, "product_id": 1, "name": "x", "price_cents": 1, "image_url": "", "quantity": -1}"#;
    assert!(serde_json::from_str::<CartLine>(json).is_err());
}

// =============================================================
// UserProfile / Order / OrderConfirmation
// =============================================================

#[test]
fn user_profile_parses_backend_shape() {
    let json = r#"{"id": 7, "email": "alice@example.com", "is_admin": false}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, 7);
    assert!(!profile.is_admin);
}

#[test]
fn order_parses_rfc3339_timestamp_as_string() {
    let json = r#"{"id": 4, "total_cents": 18500, "created_at": "2026-08-29T10:15:00Z"}"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert_eq!(order.created_at, "2026-08-29T10:15:00Z");
}

#[test]
fn order_confirmation_parses_checkout_response() {
    let json = r#"{"order_id": 5, "total_cents": 12600, "message": "Order placed successfully!"}"#;
    let confirmation: OrderConfirmation = serde_json::from_str(json).unwrap();
    assert_eq!(confirmation.order_id, 5);
    assert_eq!(confirmation.total_cents, 12600);
}

// =============================================================
// EchoedResponse
// =============================================================

#[test]
fn echoed_response_success_range() {
    assert!(EchoedResponse { status: 200, body: String::new() }.is_success());
    assert!(EchoedResponse { status: 204, body: String::new() }.is_success());
    assert!(!EchoedResponse { status: 403, body: "forbidden".to_owned() }.is_success());
    assert!(!EchoedResponse { status: 500, body: String::new() }.is_success());
}
