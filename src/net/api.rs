//! HTTP helpers for the storefront backend.
//!
//! Client-side (hydrate): real fetch calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since every endpoint is only
//! meaningful in the browser with session cookies attached.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` covering the three failure
//! classes (transport, non-success status, malformed body). Callers fold
//! errors into panel-local messages; nothing here panics or propagates past
//! a loader. Endpoints whose panels echo raw responses verbatim return
//! [`EchoedResponse`] instead of mapping non-success statuses to errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    CartLine, CatalogItem, EchoedResponse, NewProduct, Order, OrderConfirmation, UserProfile,
};
use crate::state::session::SessionState;

/// Failure taxonomy at the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Encode form fields as an `application/x-www-form-urlencoded` body.
#[cfg(any(test, feature = "hydrate"))]
fn form_body(pairs: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (key, value) in pairs {
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(&urlencoding::encode(key));
        body.push('=');
        body.push_str(&urlencoding::encode(value));
    }
    body
}

/// Build `path?key=value` with the value percent-encoded.
fn query_path(path: &str, key: &str, value: &str) -> String {
    format!("{path}?{key}={}", urlencoding::encode(value))
}

/// `src` attribute for product/avatar images routed through the backend's
/// image fetcher.
pub fn image_src(url: &str) -> String {
    query_path("/image", "url", url)
}

#[cfg(feature = "hydrate")]
fn decode_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Malformed(e.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(decode_error)
}

#[cfg(feature = "hydrate")]
async fn post_form(url: &str, pairs: &[(&str, &str)]) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(pairs))
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_echoed(url: &str) -> Result<EchoedResponse, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(EchoedResponse { status, body })
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Fetch the product listing from `GET /`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// body that is not a JSON product array.
pub async fn fetch_catalog() -> Result<Vec<CatalogItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        // An empty products table serializes as JSON `null`, not `[]`.
        let items: Option<Vec<CatalogItem>> = get_json("/").await?;
        Ok(items.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Probe the session via `GET /auth/status`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the probe cannot be read; callers fall back
/// to the logged-out default state.
pub async fn fetch_session() -> Result<SessionState, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/auth/status").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Log in via `POST /login` (form-encoded, sets the session cookie).
///
/// # Errors
///
/// Returns [`ApiError::Status`] on rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form("/login", &[("email", email), ("password", password)]).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// Register via `POST /register`; the panel echoes the raw response.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] only; non-success statuses are content.
pub async fn register(email: &str, password: &str) -> Result<EchoedResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form("/register", &[("email", email), ("password", password)]).await?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(EchoedResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// Clear the session via `POST /logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form("/logout", &[]).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch the current cart lines from `GET /cart`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] (401) while logged out.
pub async fn fetch_cart() -> Result<Vec<CartLine>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let lines: Option<Vec<CartLine>> = get_json("/cart").await?;
        Ok(lines.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Add one unit of a product via `POST /cart/add`; the backend increments
/// the quantity when the line already exists.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn add_to_cart(product_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let id = product_id.to_string();
        let resp = post_form("/cart/add", &[("product_id", &id)]).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        server_stub()
    }
}

/// Remove a cart line via `POST /cart/remove`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn remove_from_cart(cart_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let id = cart_id.to_string();
        let resp = post_form("/cart/remove", &[("cart_id", &id)]).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart_id;
        server_stub()
    }
}

/// Place an order for the whole cart via `POST /checkout`.
///
/// # Errors
///
/// Returns an [`ApiError`]; an empty cart answers with status 400.
pub async fn checkout() -> Result<OrderConfirmation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form("/checkout", &[]).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<OrderConfirmation>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch the current user record from `GET /profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// malformed body.
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch the order history from `GET /orders`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// malformed body.
pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let orders: Option<Vec<Order>> = get_json("/orders").await?;
        Ok(orders.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch the admin report from `GET /admin`. Authorization stays
/// server-side: 401/403 are echoed into the panel, not treated as errors.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] only.
pub async fn fetch_admin() -> Result<EchoedResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_echoed("/admin").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Create a product via `POST /admin/add_product`; the panel echoes the
/// raw response.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] only; non-success statuses are content.
pub async fn add_product(product: &NewProduct) -> Result<EchoedResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let price = product.price_cents.to_string();
        let resp = post_form(
            "/admin/add_product",
            &[
                ("name", &product.name),
                ("description", &product.description),
                ("price_cents", &price),
                ("image_url", &product.image_url),
            ],
        )
        .await?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(EchoedResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product;
        server_stub()
    }
}

/// Fetch an arbitrary URL through the backend's open proxy
/// (`GET /proxy?url=...`, the SSRF demonstration endpoint).
///
/// # Errors
///
/// Returns [`ApiError::Transport`] only; the panel echoes status + body.
pub async fn proxy_fetch(url: &str) -> Result<EchoedResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_echoed(&query_path("/proxy", "url", url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        server_stub()
    }
}

/// Fetch the reflected-XSS preview (`GET /preview?text=...`); the returned
/// body is HTML echoing the input unescaped.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] only; the panel echoes status + body.
pub async fn preview(text: &str) -> Result<EchoedResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_echoed(&query_path("/preview", "text", text)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        server_stub()
    }
}
