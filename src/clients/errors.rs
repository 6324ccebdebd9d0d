//! HTTP-specific error types for the storefront API client.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the backend
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for every request failure
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::resources::cart::get_cart_items;
//! use storefront_api::HttpError;
//!
//! match get_cart_items(&client).await {
//!     Ok(cart) => println!("{} items", cart.items.len()),
//!     Err(HttpError::Response(e)) => println!("Backend said {}: {}", e.code, e),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The `Display` output is the message alone. For mutating requests the
/// message is taken from the backend's error body when one is present,
/// otherwise it is the status line (`API error: 404 Not Found`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase for the status code.
    pub status_text: String,
    /// Human-readable error message.
    pub message: String,
}

impl HttpResponseError {
    /// Builds the fallback message used when the backend supplied none.
    #[must_use]
    pub fn status_line(code: u16, status_text: &str) -> String {
        format!("API error: {code} {status_text}").trim_end().to_string()
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path does not begin with `/`.
    #[error("Request path '{path}' must begin with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The base URL joined with the path is not a valid absolute URL.
    #[error("Request URL '{url}' is not a valid absolute URL.")]
    InvalidUrl {
        /// The joined URL.
        url: String,
    },
}

/// Unified error type for all request failures.
///
/// Every domain function returns this type and propagates it unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request could not be sent or the response could not be read.
    #[error("Failed to fetch {path}: {message}")]
    Network {
        /// The endpoint path that was attempted.
        path: String,
        /// The underlying failure.
        message: String,
    },

    /// A successful response body was not the expected JSON.
    #[error("Failed to fetch {path}: {message}")]
    Decode {
        /// The endpoint path that was attempted.
        path: String,
        /// The decoder failure.
        message: String,
    },

    /// The request payload could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the failure was a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message_only() {
        let error = HttpResponseError {
            code: 400,
            status_text: "Bad Request".to_string(),
            message: "Invalid coupon".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid coupon");
    }

    #[test]
    fn test_status_line_contains_code_and_reason() {
        assert_eq!(
            HttpResponseError::status_line(404, "Not Found"),
            "API error: 404 Not Found"
        );
        assert_eq!(HttpResponseError::status_line(599, ""), "API error: 599");
    }

    #[test]
    fn test_network_error_names_the_path() {
        let error = HttpError::Network {
            path: "/cart/items".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch /cart/items: connection refused"
        );
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_invalid_url() {
        let error = InvalidHttpRequestError::InvalidUrl {
            url: "http://[::1/api/home/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request URL 'http://[::1/api/home/' is not a valid absolute URL."
        );
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error = HttpError::from(HttpResponseError {
            code: 503,
            status_text: "Service Unavailable".to_string(),
            message: HttpResponseError::status_line(503, "Service Unavailable"),
        });
        assert_eq!(error.status(), Some(503));
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::RelativePath {
            path: "cart".to_string(),
        };
        let _: &dyn std::error::Error = &HttpError::Network {
            path: "/".to_string(),
            message: "boom".to_string(),
        };
    }
}
