//! HTTP request types for the storefront API client.
//!
//! Every verb and both body encodings (JSON and multipart form) go through
//! the single [`HttpRequest`] type, built with [`HttpRequest::builder`].

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that may change server state.
    ///
    /// The backend requires a CSRF token for all of these.
    #[must_use]
    pub const fn is_unsafe(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Returns `true` for methods that must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Multipart form content type (`multipart/form-data`).
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    ///
    /// For multipart bodies the transport appends the boundary parameter.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// One part of a multipart form.
#[derive(Clone, PartialEq, Eq)]
pub enum FormPart {
    /// A plain text field.
    Text(String),
    /// A file upload.
    File {
        /// File name reported to the server.
        file_name: String,
        /// MIME type of the file, if known.
        mime_type: Option<String>,
        /// Raw file contents.
        bytes: Vec<u8>,
    },
}

impl fmt::Debug for FormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::File {
                file_name,
                mime_type,
                bytes,
            } => f
                .debug_struct("File")
                .field("file_name", file_name)
                .field("mime_type", mime_type)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// A multipart form body.
///
/// This is a plain description of the form so requests stay `Clone`; it is
/// converted into a wire form only when the request is sent.
///
/// # Example
///
/// ```rust
/// use storefront_api::clients::MultipartForm;
///
/// let form = MultipartForm::new()
///     .text("name", "Ada")
///     .file("image", "me.png", Some("image/png"), vec![0x89, 0x50]);
///
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormPart::Text(value.into())));
        self
    }

    /// Appends a file part.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push((
            name.into(),
            FormPart::File {
                file_name: file_name.into(),
                mime_type: mime_type.map(String::from),
                bytes,
            },
        ));
        self
    }

    /// Returns the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the form has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the value of the first text field with the given name.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// A multipart form.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Returns the content type of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Multipart(_) => DataType::Multipart,
        }
    }
}

/// An HTTP request to be sent to the backend.
///
/// # Example
///
/// ```rust
/// use storefront_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/cart/apply-coupon")
///     .json(json!({"coupon_code": "SUMMER"}))
///     .build()
///     .unwrap();
///
/// assert!(request.with_credentials);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL; begins with `/`.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Whether cookies are attached. Unsafe methods also carry the CSRF
    /// token.
    pub with_credentials: bool,
    /// Whether a failed response's body is inspected for an error message.
    pub error_body: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// Every method sends credentials by default. Only unsafe methods read
    /// error bodies by default.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the content type of the body, if any.
    #[must_use]
    pub fn data_type(&self) -> Option<DataType> {
        self.body.as_ref().map(RequestBody::data_type)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not begin with `/`
    /// - `http_method` is POST, PUT or PATCH but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::RelativePath {
                path: self.path.clone(),
            });
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    extra_headers: Option<HashMap<String, String>>,
    with_credentials: bool,
    error_body: bool,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            extra_headers: None,
            with_credentials: true,
            error_body: method.is_unsafe(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(self, body: impl Into<serde_json::Value>) -> Self {
        self.body(RequestBody::Json(body.into()))
    }

    /// Sets a multipart form body.
    #[must_use]
    pub fn multipart(self, form: MultipartForm) -> Self {
        self.body(RequestBody::Multipart(form))
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Overrides whether cookies (and, for unsafe methods, the CSRF token)
    /// are attached.
    #[must_use]
    pub const fn with_credentials(mut self, include: bool) -> Self {
        self.with_credentials = include;
        self
    }

    /// Overrides whether the error body is consulted for a message.
    #[must_use]
    pub const fn error_body(mut self, read: bool) -> Self {
        self.error_body = read;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            extra_headers: self.extra_headers,
            with_credentials: self.with_credentials,
            error_body: self.error_body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_only_get_is_safe() {
        assert!(!HttpMethod::Get.is_unsafe());
        assert!(HttpMethod::Post.is_unsafe());
        assert!(HttpMethod::Patch.is_unsafe());
        assert!(HttpMethod::Delete.is_unsafe());
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(DataType::Multipart.as_content_type(), "multipart/form-data");
    }

    #[test]
    fn test_get_request_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "/home/")
            .build()
            .unwrap();

        assert_eq!(request.path, "/home/");
        assert!(request.body.is_none());
        assert!(request.with_credentials);
        assert!(!request.error_body);
    }

    #[test]
    fn test_post_request_defaults_to_credentials() {
        let request = HttpRequest::builder(HttpMethod::Post, "/accounts/logout")
            .json(json!({}))
            .build()
            .unwrap();

        assert!(request.with_credentials);
        assert!(request.error_body);
        assert_eq!(request.data_type(), Some(DataType::Json));
    }

    #[test]
    fn test_delete_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/accounts/profile")
            .build()
            .unwrap();
        assert!(request.with_credentials);
        assert_eq!(request.data_type(), None);
    }

    #[test]
    fn test_verify_requires_body_for_patch() {
        let result = HttpRequest::builder(HttpMethod::Patch, "/accounts/users/3").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_verify_requires_leading_slash() {
        let result = HttpRequest::builder(HttpMethod::Get, "cart/items").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::RelativePath { .. })
        ));
    }

    #[test]
    fn test_multipart_body_sets_data_type() {
        let form = MultipartForm::new().text("name", "Ada");
        let request = HttpRequest::builder(HttpMethod::Patch, "/accounts/profile")
            .multipart(form)
            .build()
            .unwrap();

        assert_eq!(request.data_type(), Some(DataType::Multipart));
    }

    #[test]
    fn test_multipart_form_lookup_and_debug() {
        let form = MultipartForm::new()
            .text("surname", "Lovelace")
            .file("image", "a.png", Some("image/png"), vec![1, 2, 3]);

        assert_eq!(form.text_value("surname"), Some("Lovelace"));
        assert_eq!(form.text_value("image"), None);
        let debug = format!("{form:?}");
        assert!(debug.contains("len: 3"));
    }

    #[test]
    fn test_builder_with_extra_headers_and_overrides() {
        let request = HttpRequest::builder(HttpMethod::Get, "/accounts/profile")
            .header("X-Requested-With", "XMLHttpRequest")
            .with_credentials(false)
            .error_body(true)
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Requested-With"),
            Some(&"XMLHttpRequest".to_string())
        );
        assert!(!request.with_credentials);
        assert!(request.error_body);
    }
}
