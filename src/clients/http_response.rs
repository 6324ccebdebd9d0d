//! HTTP response type for the storefront API client.

use std::collections::HashMap;

/// An HTTP response from the backend.
///
/// The body is kept as raw text; decoding is done by the caller so success
/// and error bodies can be handled differently.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status code.
    pub status_text: String,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        status_text: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header (name is case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every `Set-Cookie` header value.
    #[must_use]
    pub fn set_cookies(&self) -> &[String] {
        self.headers
            .get("set-cookie")
            .map_or(&[], Vec::as_slice)
    }

    /// Extracts an error message from a JSON error body.
    ///
    /// Looks at `message` first, then the backend's `detail` field. Empty
    /// values (`null`, `false`, `0`, `""`) count as absent. A body that is
    /// not JSON (or not an object) yields `None`, so the caller falls back
    /// to the status line.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let payload: serde_json::Value =
            serde_json::from_str(&self.body).unwrap_or_else(|_| serde_json::json!({}));

        ["message", "detail"]
            .iter()
            .find_map(|key| payload.get(key).and_then(message_text))
    }
}

fn message_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        other => Some(other.to_string()),
    }
}
