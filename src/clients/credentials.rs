//! Cookie and CSRF credential providers.
//!
//! The backend binds the `X-CSRFToken` header to a secret stored in the
//! `csrftoken` cookie, and identifies the user by its session cookie. The
//! transport layer gets both from a [`CredentialProvider`] passed in at
//! construction time instead of reading an ambient cookie store.
//!
//! # Providers
//!
//! - [`NoCredentials`]: sends nothing; mutations go out without a token
//! - [`StaticCookies`]: a fixed `Cookie` header value
//! - [`CookieJar`]: starts empty and records `Set-Cookie` responses, so
//!   calling `set_csrf_token` once arms every following mutation
//!
//! # Security
//!
//! `Debug` output of the providers never contains cookie values.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::clients::{csrf_token_from_cookies, CookieJar, CredentialProvider};
//! use storefront_api::Url;
//!
//! assert_eq!(
//!     csrf_token_from_cookies("a=1; csrftoken=AbC%3D1; b=2", "csrftoken"),
//!     Some("AbC=1".to_string())
//! );
//!
//! let url = Url::parse("http://localhost:8000/api/accounts/set-csrf-token").unwrap();
//! let jar = CookieJar::new();
//! jar.store_cookie("csrftoken=tok123; Path=/; SameSite=Lax", &url);
//! assert_eq!(jar.csrf_token(&url, "csrftoken").as_deref(), Some("tok123"));
//! ```

use std::borrow::Cow;
use std::fmt;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

/// Reads a named cookie from a `Cookie` header string.
///
/// The header is split on `;` and each entry trimmed; the first entry
/// literally prefixed `name=` wins and its value is percent-decoded. Values
/// that do not decode to UTF-8 are returned as-is. Returns `None` when the
/// header is empty or has no such entry.
#[must_use]
pub fn csrf_token_from_cookies(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.is_empty() {
        return None;
    }

    let prefix = format!("{name}=");
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned))
}

/// Supplies cookies and the CSRF token to the transport layer.
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Returns the `Cookie` header value to send to `url`, if any.
    fn cookie_header(&self, url: &Url) -> Option<String>;

    /// Returns the CSRF token stored under `cookie_name`, if any.
    fn csrf_token(&self, url: &Url, cookie_name: &str) -> Option<String> {
        self.cookie_header(url)
            .and_then(|header| csrf_token_from_cookies(&header, cookie_name))
    }

    /// Records a `Set-Cookie` header received in a response from `url`.
    ///
    /// Providers with a fixed cookie set ignore this.
    fn store_cookie(&self, _set_cookie: &str, _url: &Url) {}
}

/// A provider that never sends cookies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn cookie_header(&self, _url: &Url) -> Option<String> {
        None
    }
}

/// A provider holding a fixed `Cookie` header value.
///
/// # Example
///
/// ```rust
/// use storefront_api::clients::{CredentialProvider, StaticCookies};
/// use storefront_api::Url;
///
/// let url = Url::parse("http://localhost:8000/api/cart/update").unwrap();
/// let cookies = StaticCookies::new("sessionid=s1; csrftoken=t1");
/// assert_eq!(cookies.csrf_token(&url, "csrftoken").as_deref(), Some("t1"));
/// assert_eq!(format!("{cookies:?}"), "StaticCookies(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCookies(String);

impl StaticCookies {
    /// Creates a provider from a raw `Cookie` header value.
    #[must_use]
    pub fn new(cookie_header: impl Into<String>) -> Self {
        Self(cookie_header.into())
    }
}

impl fmt::Debug for StaticCookies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticCookies(*****)")
    }
}

/// The header is sent to every URL unchanged.
impl CredentialProvider for StaticCookies {
    fn cookie_header(&self, _url: &Url) -> Option<String> {
        if self.0.trim().is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

/// An in-memory cookie store fed by `Set-Cookie` response headers.
///
/// Backed by reqwest's cookie [`Jar`], so `Expires`, `Max-Age`, `Path` and
/// `Domain` are honored: an expired cookie is dropped, and a cookie is only
/// replayed to URLs its scope matches.
#[derive(Default)]
pub struct CookieJar {
    jar: Jar,
}

impl CookieJar {
    /// Creates an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cookie in `Set-Cookie` syntax as if `url` had sent it.
    pub fn add_cookie_str(&self, cookie: &str, url: &Url) {
        self.jar.add_cookie_str(cookie, url);
    }

    /// Returns the raw (still encoded) value of a cookie sent to `url`.
    #[must_use]
    pub fn get(&self, url: &Url, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.cookie_header(url)?
            .split(';')
            .map(str::trim)
            .find_map(|cookie| cookie.strip_prefix(prefix.as_str()).map(String::from))
    }
}

impl fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieJar").finish_non_exhaustive()
    }
}

impl CredentialProvider for CookieJar {
    fn cookie_header(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(String::from))
    }

    fn store_cookie(&self, set_cookie: &str, url: &Url) {
        tracing::debug!(path = url.path(), "Storing Set-Cookie");
        self.jar.add_cookie_str(set_cookie, url);
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NoCredentials>();
    assert_send_sync::<StaticCookies>();
    assert_send_sync::<CookieJar>();
};
