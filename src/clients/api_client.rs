//! Typed request helpers on top of [`HttpClient`].
//!
//! [`ApiClient::get`] and [`ApiClient::post`] are the two transport
//! primitives the domain modules build on; `put`, `patch`, `delete` and the
//! multipart helpers cover the remaining endpoints through the same
//! [`HttpClient::request`] path.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::credentials::{CookieJar, CredentialProvider};
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartForm};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// Typed client for the storefront backend.
///
/// Responses are decoded into the caller's type; the shape is asserted by
/// deserialization, not validated beyond it.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_api::{ApiClient, ApiConfig};
/// use storefront_api::resources::accounts::{login_user, set_csrf_token, UserLoginPayload};
///
/// let client = ApiClient::with_cookie_jar(&ApiConfig::from_env()?);
///
/// set_csrf_token(&client).await?;
/// let reply = login_user(&client, &UserLoginPayload {
///     username: Some("ada".into()),
///     email: None,
///     password: "hunter2".into(),
/// }).await?;
/// println!("{}", reply.detail);
/// ```
#[derive(Debug)]
pub struct ApiClient {
    http_client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client with an explicit credential provider.
    #[must_use]
    pub fn new(config: &ApiConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http_client: HttpClient::new(config, credentials),
        }
    }

    /// Creates a client backed by a fresh [`CookieJar`].
    #[must_use]
    pub fn with_cookie_jar(config: &ApiConfig) -> Self {
        Self::new(config, Arc::new(CookieJar::new()))
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] on a non-2xx status (message
    /// `API error: {code} {reason}`), [`HttpError::Network`] if the request
    /// fails, or [`HttpError::Decode`] if the body is not the expected JSON.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.send(request).await
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    ///
    /// Cookies and the CSRF token are attached. On a non-2xx status the
    /// error body's `message` (or `detail`) becomes the error message.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`]; additionally [`HttpError::Encode`] if `body`
    /// cannot be serialized.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Post, path, body).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Put, path, body).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Patch, path, body).await
    }

    /// Sends a DELETE request without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.send(request).await
    }

    /// Sends a POST request with a multipart form body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .multipart(form)
            .build()?;
        self.send(request).await
    }

    /// Sends a PATCH request with a multipart form body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .multipart(form)
            .build()?;
        self.send(request).await
    }

    /// Sends any request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, HttpError> {
        let path = request.path.clone();
        let response = self.http_client.request(request).await?;
        Self::decode(&path, &response)
    }

    async fn send_json<B, T>(&self, method: HttpMethod, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let request = HttpRequest::builder(method, path).json(body).build()?;
        self.send(request).await
    }

    fn decode<T: DeserializeOwned>(path: &str, response: &HttpResponse) -> Result<T, HttpError> {
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("Could not decode response from {}: {}", path, e);
            HttpError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }
}
