//! HTTP transport for the storefront backend.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends an [`HttpRequest`] and returns an [`HttpResponse`]
//! - [`ApiClient`]: typed `get`/`post`/`put`/`patch`/`delete` helpers
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: one request type for every
//!   verb, with JSON or multipart bodies
//! - [`CredentialProvider`]: where cookies and the CSRF token come from
//! - [`HttpError`]: unified failure type
//!
//! # Headers
//!
//! - `Content-Type: application/json` on GET and JSON-bodied requests
//! - `Cookie` on every request, when the provider has cookies
//! - `X-CSRFToken` on POST/PUT/PATCH/DELETE, when the CSRF cookie is set
//!
//! # Failure Behavior
//!
//! Requests are never retried. A non-2xx status becomes
//! [`HttpError::Response`]; a transport or decode failure names the path.

mod api_client;
mod credentials;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_client::ApiClient;
pub use credentials::{
    csrf_token_from_cookies, CookieJar, CredentialProvider, NoCredentials, StaticCookies,
};
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    DataType, FormPart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartForm, RequestBody,
};
pub use http_response::HttpResponse;
pub use reqwest::Url;
