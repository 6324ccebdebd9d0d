//! Home page content from the CMS.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError};

/// The home page.
///
/// Fields beyond the known ones are kept in `extra`, since the CMS model
/// may grow without notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomePage {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Fetches the home page.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_home_page(client: &ApiClient) -> Result<HomePage, HttpError> {
    client.get("/home/").await
}
