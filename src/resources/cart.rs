//! Session cart endpoints.
//!
//! The cart lives in the backend session, so every call needs the session
//! cookie; mutations also need the CSRF token.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError};

/// Cart counters returned after a mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartResponse {
    /// Total number of units in the cart.
    pub cart_qty: u32,
    /// Quantity (or line total) of the affected product.
    pub product_qty: f64,
}

/// Payload for [`delete_from_cart`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartDeletePayload {
    /// Product to remove.
    pub product_id: u64,
    /// Backend action tag; omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl CartDeletePayload {
    /// Removes `product_id` without an action tag.
    #[must_use]
    pub const fn new(product_id: u64) -> Self {
        Self {
            product_id,
            action: None,
        }
    }
}

/// Payload for [`update_cart`]. Sets the quantity, it does not add to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartUpdatePayload {
    pub product_id: u64,
    /// New quantity for the line.
    pub product_qty: u32,
    /// Backend action tag, typically `"post"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl CartUpdatePayload {
    #[must_use]
    pub const fn new(product_id: u64, product_qty: u32) -> Self {
        Self {
            product_id,
            product_qty,
            action: None,
        }
    }
}

/// Payload for [`apply_coupon`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponApplyPayload {
    pub coupon_code: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponApplyResponse {
    pub success: bool,
}

/// One cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: u64,
    pub name: String,
    pub qty: u32,
    /// Unit price.
    pub price: f64,
    pub slug: String,
}

/// The cart contents returned by [`get_cart_items`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartListResponse {
    pub items: Vec<CartItem>,
    /// Total number of units across all lines.
    pub cart_qty: u32,
    /// Sum of `qty * price` over all lines.
    pub total: f64,
}

/// Removes a product from the cart.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn delete_from_cart(
    client: &ApiClient,
    payload: &CartDeletePayload,
) -> Result<CartResponse, HttpError> {
    client.post("/cart/delete", payload).await
}

/// Sets a product's quantity, adding it if absent.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn update_cart(
    client: &ApiClient,
    payload: &CartUpdatePayload,
) -> Result<CartResponse, HttpError> {
    client.post("/cart/update", payload).await
}

/// Applies a coupon code to the session cart.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request. A rejected code may come
/// back either as `success: false` or as an error carrying the backend's
/// message.
pub async fn apply_coupon(
    client: &ApiClient,
    payload: &CouponApplyPayload,
) -> Result<CouponApplyResponse, HttpError> {
    client.post("/cart/apply-coupon", payload).await
}

/// Lists the cart contents with totals.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_cart_items(client: &ApiClient) -> Result<CartListResponse, HttpError> {
    client.get("/cart/items").await
}
