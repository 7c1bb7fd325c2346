//! DTOs for the storefront backend's JSON payloads.
//!
//! DESIGN
//! ======
//! These types mirror the backend's wire shapes field-for-field so panel
//! code stays schema-driven. The cart and catalog projections are
//! client-visible only; the server remains authoritative.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One product as listed by `GET /`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// Nullable in the products table; rendered as empty text.
    #[serde(default)]
    pub description: String,
    pub price_cents: u32,
    /// Already rewritten by the backend to route through `/image?url=...`.
    pub image_url: String,
}

/// One cart line as returned by `GET /cart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart row id, used for `POST /cart/remove`.
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub price_cents: u32,
    pub image_url: String,
    /// Always >= 1; the backend deletes the row instead of storing zero.
    pub quantity: u32,
}

/// The current user record from `GET /profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
}

/// One past order from `GET /orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub total_cents: u32,
    /// RFC 3339 timestamp; displayed as its date portion only.
    pub created_at: String,
}

/// Confirmation payload from `POST /checkout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: i64,
    pub total_cents: u32,
    pub message: String,
}

/// Form fields for `POST /admin/add_product`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub image_url: String,
}

/// Raw status + body from endpoints whose panels echo the response
/// verbatim (`/admin`, `/proxy`, `/preview`, `/register`), where a
/// non-success status is content to display rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EchoedResponse {
    pub status: u16,
    pub body: String,
}

impl EchoedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
