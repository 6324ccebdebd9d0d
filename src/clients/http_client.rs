//! HTTP client for backend communication.
//!
//! This module provides the [`HttpClient`] type, the single code path that
//! every request goes through regardless of verb or body encoding.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::credentials::{CredentialProvider, NoCredentials};
use reqwest::Url;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{DataType, FormPart, HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiConfig, BaseUrl};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the backend.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`User-Agent`, `Accept`, JSON `Content-Type`)
/// - Attaching cookies, plus the CSRF header on unsafe methods
/// - Feeding `Set-Cookie` responses back to the credential provider
/// - Turning non-2xx responses into [`HttpResponseError`]
///
/// There is no retry, timeout or cancellation: each call is one round trip
/// awaited to completion.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storefront_api::{ApiConfig, CookieJar, HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&ApiConfig::default(), Arc::new(CookieJar::new()));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/cart/items")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `http://localhost:8000/api`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Source of cookies and the CSRF token.
    credentials: Arc<dyn CredentialProvider>,
    /// Cookie the CSRF token is read from.
    csrf_cookie_name: String,
    /// Header the CSRF token is sent in.
    csrf_header_name: String,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, CSRF names and user agent prefix
    /// * `credentials` - Cookie and CSRF token source
    #[must_use]
    pub fn new(config: &ApiConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Storefront API Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().clone(),
            default_headers,
            credentials,
            csrf_cookie_name: config.csrf_cookie_name().to_string(),
            csrf_header_name: config.csrf_header_name().to_string(),
        }
    }

    /// Creates a client that sends no cookies.
    #[must_use]
    pub fn without_credentials(config: &ApiConfig) -> Self {
        Self::new(config, Arc::new(NoCredentials))
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the credential provider.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialProvider {
        self.credentials.as_ref()
    }

    /// Resolves a request path against the base URL.
    fn url_for(&self, path: &str) -> Result<Url, InvalidHttpRequestError> {
        let joined = self.base_url.join(path);
        Url::parse(&joined).map_err(|_| InvalidHttpRequestError::InvalidUrl { url: joined })
    }

    /// Assembles the headers for a request sent to `url`.
    ///
    /// Returns the header map and whether a CSRF token was attached.
    fn build_headers(&self, request: &HttpRequest, url: &Url) -> (HashMap<String, String>, bool) {
        let mut headers = self.default_headers.clone();

        // Multipart content type carries a boundary and is set by the form.
        let json_content = match request.data_type() {
            Some(DataType::Json) => true,
            Some(DataType::Multipart) => false,
            None => request.http_method == HttpMethod::Get,
        };
        if json_content {
            headers.insert(
                "Content-Type".to_string(),
                DataType::Json.as_content_type().to_string(),
            );
        }

        let mut csrf_attached = false;
        if request.with_credentials {
            if let Some(cookie) = self.credentials.cookie_header(url) {
                headers.insert("Cookie".to_string(), cookie);
            }
            if let Some(token) = request
                .http_method
                .is_unsafe()
                .then(|| self.credentials.csrf_token(url, &self.csrf_cookie_name))
                .flatten()
                .filter(|t| !t.is_empty())
            {
                headers.insert(self.csrf_header_name.clone(), token);
                csrf_attached = true;
            }
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        (headers, csrf_attached)
    }

    /// Converts a [`crate::clients::MultipartForm`] into a reqwest form.
    fn build_form(
        path: &str,
        form: &crate::clients::MultipartForm,
    ) -> Result<reqwest::multipart::Form, HttpError> {
        let mut out = reqwest::multipart::Form::new();
        for (name, part) in form.parts() {
            out = match part {
                FormPart::Text(value) => out.text(name.clone(), value.clone()),
                FormPart::File {
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let mut file = reqwest::multipart::Part::bytes(bytes.clone())
                        .file_name(file_name.clone());
                    if let Some(mime) = mime_type {
                        file = file.mime_str(mime).map_err(|e| HttpError::Network {
                            path: path.to_string(),
                            message: e.to_string(),
                        })?;
                    }
                    out.part(name.clone(), file)
                }
            };
        }
        Ok(out)
    }

    /// Sends an HTTP request to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent or the body cannot be read (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path)?;
        let (headers, csrf_attached) = self.build_headers(&request, &url);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
            HttpMethod::Put => self.client.put(url.clone()),
            HttpMethod::Patch => self.client.patch(url.clone()),
            HttpMethod::Delete => self.client.delete(url.clone()),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = match &request.body {
            Some(RequestBody::Json(body)) => req_builder.body(body.to_string()),
            Some(RequestBody::Multipart(form)) => {
                req_builder.multipart(Self::build_form(&request.path, form)?)
            }
            None => req_builder,
        };

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            csrf = csrf_attached,
            "Sending request"
        );

        let res = req_builder.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", request.path, e);
            HttpError::Network {
                path: request.path.clone(),
                message: e.to_string(),
            }
        })?;

        let status = res.status();
        let code = status.as_u16();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.map_err(|e| HttpError::Network {
            path: request.path.clone(),
            message: e.to_string(),
        })?;

        let response = HttpResponse::new(code, status_text, res_headers, body);

        for set_cookie in response.set_cookies() {
            self.credentials.store_cookie(set_cookie, &url);
        }

        tracing::debug!(path = %request.path, status = code, "Received response");

        if response.is_ok() {
            return Ok(response);
        }

        let message = request
            .error_body
            .then(|| response.error_message())
            .flatten()
            .unwrap_or_else(|| HttpResponseError::status_line(code, &response.status_text));

        tracing::warn!(
            "Request {} {} failed with status {}: {}",
            request.http_method,
            request.path,
            code,
            message
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            status_text: response.status_text,
            message,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
