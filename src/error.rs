//! Error types for the storefront API client.
//!
//! This module contains error types used for configuration and validation
//! errors. HTTP errors live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("localhost:8000");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'http://localhost:8000/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The CSRF cookie name cannot be empty.
    #[error("CSRF cookie name cannot be empty.")]
    EmptyCsrfCookieName,

    /// The CSRF header name cannot be empty.
    #[error("CSRF header name cannot be empty.")]
    EmptyCsrfHeaderName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_empty_cookie_name_error_message() {
        let error = ConfigError::EmptyCsrfCookieName;
        assert_eq!(error.to_string(), "CSRF cookie name cannot be empty.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCsrfHeaderName;
        let _: &dyn std::error::Error = &error;
    }
}
