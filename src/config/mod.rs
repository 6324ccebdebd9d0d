//! Configuration types for the storefront API client.
//!
//! # Overview
//!
//! - [`ApiConfig`]: all client settings
//! - [`ApiConfigBuilder`]: a builder for [`ApiConfig`]
//! - [`BaseUrl`]: a validated backend base URL
//!
//! # Environment
//!
//! [`ApiConfig::from_env`] reads `STOREFRONT_API_URL`. When the variable is
//! unset or empty, the local development address [`DEFAULT_BASE_URL`] is used.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com/api").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.csrf_cookie_name(), "csrftoken");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Base URL used when no environment value is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "STOREFRONT_API_URL";

/// Name of the cookie the backend stores its CSRF secret in.
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the backend reads the CSRF token from on unsafe methods.
pub const DEFAULT_CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Configuration for the storefront API client.
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    csrf_cookie_name: String,
    csrf_header_name: String,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `STOREFRONT_API_URL` is set
    /// to something that is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(BASE_URL_ENV_VAR).ok();
        Self::from_base_url_value(value.as_deref())
    }

    /// Resolves the base URL from an optional raw value, falling back to
    /// [`DEFAULT_BASE_URL`] when the value is absent or blank.
    fn from_base_url_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let raw = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        tracing::debug!("Resolved storefront API base URL: {}", raw);
        Self::builder().base_url(BaseUrl::new(raw)?).build()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the name of the CSRF cookie.
    #[must_use]
    pub fn csrf_cookie_name(&self) -> &str {
        &self.csrf_cookie_name
    }

    /// Returns the name of the CSRF request header.
    #[must_use]
    pub fn csrf_header_name(&self) -> &str {
        &self.csrf_header_name
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER_NAME.to_string(),
            user_agent_prefix: None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `csrf_cookie_name`: `csrftoken`
/// - `csrf_header_name`: `X-CSRFToken`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    csrf_cookie_name: Option<String>,
    csrf_header_name: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the CSRF cookie name.
    #[must_use]
    pub fn csrf_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie_name = Some(name.into());
        self
    }

    /// Sets the CSRF header name.
    #[must_use]
    pub fn csrf_header_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_header_name = Some(name.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCsrfCookieName`] or
    /// [`ConfigError::EmptyCsrfHeaderName`] if either name was set to an
    /// empty string.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let defaults = ApiConfig::default();

        let csrf_cookie_name = self
            .csrf_cookie_name
            .unwrap_or(defaults.csrf_cookie_name);
        if csrf_cookie_name.is_empty() {
            return Err(ConfigError::EmptyCsrfCookieName);
        }

        let csrf_header_name = self
            .csrf_header_name
            .unwrap_or(defaults.csrf_header_name);
        if csrf_header_name.is_empty() {
            return Err(ConfigError::EmptyCsrfHeaderName);
        }

        Ok(ApiConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            csrf_cookie_name,
            csrf_header_name,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
