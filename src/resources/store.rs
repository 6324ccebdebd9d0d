//! Product catalog endpoints.
//!
//! Reads are public; create, update and delete require a staff session.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::resources::store::{get_products, update_product, ProductUpdatePayload};
//!
//! for product in get_products(&client).await? {
//!     println!("{} ({})", product.name, product.slug);
//! }
//!
//! let payload = ProductUpdatePayload { price: Some(12.5), ..Default::default() };
//! update_product(&client, 7, &payload).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::clients::{ApiClient, HttpError};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// A product's category: a bare id from the model schema, or the nested
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Foreign key only.
    Id(u64),
    /// Expanded record.
    Category(Category),
}

impl CategoryRef {
    /// Returns the category id in either form.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Id(id) => *id,
            Self::Category(category) => category.id,
        }
    }
}

/// A catalog product.
///
/// Only `id`, `name` and `slug` are guaranteed; the rest depends on which
/// schema the endpoint serializes with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// URL slug, unique per product.
    pub slug: String,
    /// Unit price before discount.
    #[serde(default)]
    pub price: Option<f64>,
    /// Discount in percent.
    #[serde(default)]
    pub discount: Option<u32>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

/// Payload for [`create_product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCreatePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slug: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Category to file the product under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Fields for [`update_product`]; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    /// Tag ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
}

/// Lists all categories.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_categories(client: &ApiClient) -> Result<Vec<Category>, HttpError> {
    client.get("/store/categories/").await
}

/// Lists all products.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_products(client: &ApiClient) -> Result<Vec<Product>, HttpError> {
    client.get("/store/products/").await
}

/// Fetches one product.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_product(client: &ApiClient, product_id: u64) -> Result<Product, HttpError> {
    client.get(&format!("/store/products/{product_id}")).await
}

/// Creates a product.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn create_product(
    client: &ApiClient,
    payload: &ProductCreatePayload,
) -> Result<Product, HttpError> {
    client.post("/store/products/", payload).await
}

/// Replaces the given fields of a product (PUT).
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn update_product(
    client: &ApiClient,
    product_id: u64,
    payload: &ProductUpdatePayload,
) -> Result<Product, HttpError> {
    client
        .put(&format!("/store/products/{product_id}"), payload)
        .await
}

/// Deletes a product.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request. A refusal carries the
/// backend's `detail` message.
pub async fn delete_product(
    client: &ApiClient,
    product_id: u64,
) -> Result<MessageResponse, HttpError> {
    client
        .delete(&format!("/store/products/{product_id}"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ref_accepts_id_or_record() {
        let by_id: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Mug", "slug": "mug", "category": 4}"#)
                .unwrap();
        let nested: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Mug", "slug": "mug",
                "category": {"id": 4, "name": "Kitchen", "slug": "kitchen"}}"#,
        )
        .unwrap();

        assert_eq!(by_id.category, Some(CategoryRef::Id(4)));
        assert_eq!(nested.category.as_ref().map(CategoryRef::id), Some(4));
        assert!(by_id.price.is_none());
    }

    #[test]
    fn test_null_category_decodes_as_none() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Mug", "slug": "mug", "price": 12.5, "discount": 10, "category": null}"#,
        )
        .unwrap();
        assert!(product.category.is_none());
        assert_eq!(product.discount, Some(10));
    }

    #[test]
    fn test_update_payload_only_sends_set_fields() {
        let payload = ProductUpdatePayload {
            price: Some(12.5),
            tags: Some(vec![1, 2]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({"price": 12.5, "tags": [1, 2]})
        );
    }
}
