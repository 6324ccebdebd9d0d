//! Checkout and order completion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MessageResponse;
use crate::clients::{ApiClient, HttpError};

/// The user's saved shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Owner of the address.
    pub user_id: u64,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    /// Country code, e.g. `GB`.
    pub country: String,
    pub zipcode: String,
}

/// A cart line as reported by checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemCheckout {
    /// Product record, shape not fixed by the backend.
    pub product: serde_json::Value,
    pub qty: u32,
    /// Unit price.
    pub price: f64,
    pub slug: String,
}

/// A selectable country. On the wire: `["CODE", "Name"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.code, &self.name).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (code, name) = <(String, String)>::deserialize(deserializer)?;
        Ok(Self { code, name })
    }
}

/// Everything the checkout form needs, from [`get_checkout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    /// Countries offered in the address form.
    pub countries: Vec<Country>,
    pub cart: Vec<CartItemCheckout>,
    /// Saved address, absent for a first order.
    #[serde(default)]
    pub shipping: Option<ShippingAddress>,
}

/// Order details. Serialized with the backend's short field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompleteOrderPayload {
    #[serde(rename = "fn")]
    pub first_name: String,
    #[serde(rename = "sn")]
    pub surname: String,
    #[serde(rename = "em")]
    pub email: String,
    #[serde(rename = "ad1")]
    pub address1: String,
    #[serde(rename = "ad2", skip_serializing_if = "Option::is_none", default)]
    pub address2: Option<String>,
    #[serde(rename = "ct")]
    pub city: String,
    #[serde(rename = "st", skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
    /// Country code.
    #[serde(rename = "cntry")]
    pub country: String,
    pub zip: String,
}

/// Fetches countries, the cart and any saved shipping address.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_checkout(client: &ApiClient) -> Result<CheckoutResponse, HttpError> {
    client.get("/payments/checkout").await
}

/// Places the order for the current cart.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn complete_order(
    client: &ApiClient,
    payload: &CompleteOrderPayload,
) -> Result<MessageResponse, HttpError> {
    client.post("/payments/complete-order", payload).await
}
