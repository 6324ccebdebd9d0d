//! Endpoint wrappers grouped by business area.
//!
//! Each module defines the wire shapes for its endpoints and one async
//! function per endpoint. Every function takes an [`ApiClient`], builds the
//! path, and delegates to one of the client's transport helpers. No
//! function validates input, retries, or caches; failures propagate
//! unchanged as [`HttpError`].
//!
//! | Module | Backend prefix |
//! |--------|----------------|
//! | [`accounts`] | `/accounts/` |
//! | [`blog`] | `/blog/` |
//! | [`cart`] | `/cart/` |
//! | [`home`] | `/home/` |
//! | [`about`] | `/about/` |
//! | [`store`] | `/store/` |
//! | [`payments`] | `/payments/` |
//!
//! [`ApiClient`]: crate::clients::ApiClient
//! [`HttpError`]: crate::clients::HttpError

pub mod about;
pub mod accounts;
pub mod blog;
pub mod cart;
pub mod home;
pub mod payments;
pub mod store;

use serde::{Deserialize, Serialize};

/// Generic acknowledgment returned by many endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub detail: String,
}

/// Percent-encodes a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
