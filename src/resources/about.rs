//! About page content from the CMS.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError};

/// A stat value: either display text or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: StatValue,
}

/// The about page; unknown fields are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutPage {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Fetches the about page.
///
/// # Errors
///
/// Propagates any [`HttpError`] from the request.
pub async fn get_about_page(client: &ApiClient) -> Result<AboutPage, HttpError> {
    client.get("/about/").await
}
