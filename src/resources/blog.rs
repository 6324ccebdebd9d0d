//! Blog post listing and detail endpoints.
//!
//! Post bodies are CMS stream blocks. They are kept as type-tagged opaque
//! values ([`BodyBlock`]) so new block types decode without a crate update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::segment;
use crate::clients::{ApiClient, HttpError};

/// A post author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// An image from a post's gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    /// Image URL.
    pub image: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// One stream block of a post body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyBlock {
    /// Block type tag, e.g. `heading` or `paragraph`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Block payload, shape depends on `block_type`.
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Known block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Image,
    Other,
}

impl BodyBlock {
    /// Classifies the block by its type tag.
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        match self.block_type.as_str() {
            "heading" => BlockKind::Heading,
            "paragraph" => BlockKind::Paragraph,
            "image" => BlockKind::Image,
            _ => BlockKind::Other,
        }
    }

    /// Returns the value as text when the block carries a plain string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// A post as it appears in the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostListItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub first_image: Option<GalleryImage>,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Category name.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A full post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostDetail {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub body: Vec<BodyBlock>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Lists published posts.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_blog_posts(client: &ApiClient) -> Result<Vec<BlogPostListItem>, HttpError> {
    client.get("/blog/posts/").await
}

/// Fetches a post by slug. The slug is percent-encoded into the path.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_blog_post_by_slug(
    client: &ApiClient,
    slug: &str,
) -> Result<BlogPostDetail, HttpError> {
    client.get(&format!("/blog/post/{}/", segment(slug))).await
}

/// Fetches a post by numeric id.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_blog_post_by_id(client: &ApiClient, id: u64) -> Result<BlogPostDetail, HttpError> {
    client.get(&format!("/blog/post/{id}/")).await
}
