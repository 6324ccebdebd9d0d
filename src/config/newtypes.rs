//! Validated newtype wrappers for configuration values.
//!
//! Values are checked on construction; invalid input is rejected with a
//! [`ConfigError`].

use super::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use std::fmt;

/// A validated backend base URL.
///
/// The URL must have an alphabetic scheme and a non-empty host. A trailing
/// slash is trimmed so request paths (which begin with `/`) can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use storefront_api::BaseUrl;
///
/// let url = BaseUrl::new("https://shop.example.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com/api");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// assert_eq!(url.join("/home/"), "https://shop.example.com/api/home/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, a
    /// non-alphabetic scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends a request path to the base URL.
    ///
    /// The path is expected to begin with `/`; one is inserted when missing.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.url)
        } else {
            format!("{}/{path}", self.url)
        }
    }
}

impl Default for BaseUrl {
    /// The local development address, [`DEFAULT_BASE_URL`].
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");

        let url = BaseUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "shop.example.com");
    }

    #[test]
    fn test_base_url_trims_trailing_slash_and_whitespace() {
        let url = BaseUrl::new("  http://localhost:8000/api/ ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8000/api");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("localhost:8000").is_err());
        assert!(BaseUrl::new("http://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("ht1p://example.com").is_err());
        assert!(BaseUrl::new("http://:8000").is_err());
    }

    #[test]
    fn test_default_matches_parsed_default() {
        let parsed = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(BaseUrl::default(), parsed);
        assert_eq!(BaseUrl::default().host_name(), "localhost");
    }

    #[test]
    fn test_join_appends_path() {
        let url = BaseUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(url.join("/cart/items"), "http://localhost:8000/api/cart/items");
        assert_eq!(url.join("home/"), "http://localhost:8000/api/home/");
    }
}
