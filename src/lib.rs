//! # Storefront API Client
//!
//! A typed async client for the storefront backend (accounts, blog, cart,
//! CMS pages, catalog and checkout), plus the application's client-side
//! route table.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`ApiConfig`] and [`ApiConfigBuilder`], with the
//!   base URL read from `STOREFRONT_API_URL`
//! - A transport layer ([`ApiClient`], [`HttpClient`]) that attaches session
//!   cookies and the CSRF token to mutations and maps backend errors into
//!   [`HttpError`]
//! - Pluggable credentials via [`CredentialProvider`]; [`CookieJar`] keeps
//!   cookies set by the backend
//! - One async function per backend endpoint in [`resources`]
//! - Path-to-page resolution via [`Router`]
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8000/api");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use storefront_api::{ApiClient, ApiConfig};
//! use storefront_api::resources::{accounts, cart};
//!
//! let client = ApiClient::with_cookie_jar(&ApiConfig::from_env()?);
//!
//! // The CSRF cookie must be set before any mutation
//! accounts::set_csrf_token(&client).await?;
//!
//! let payload = cart::CartUpdatePayload::new(7, 2);
//! let counts = cart::update_cart(&client, &payload).await?;
//! println!("{} items in cart", counts.cart_qty);
//!
//! match cart::apply_coupon(&client, &cart::CouponApplyPayload {
//!     coupon_code: "SPRING".into(),
//! }).await {
//!     Ok(reply) => println!("applied: {}", reply.success),
//!     Err(e) => println!("{e}"), // e.g. "Invalid coupon"
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and credentials are passed explicitly
//! - **No retries**: every call is exactly one request
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod router;

// Re-export public types at crate root for convenience
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    csrf_token_from_cookies, ApiClient, CookieJar, CredentialProvider, DataType, HttpClient,
    HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, MultipartForm, NoCredentials, StaticCookies, Url,
};

pub use resources::MessageResponse;
pub use router::{Page, RouteMatch, Router};
