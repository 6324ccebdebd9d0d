//! Client-side route table.
//!
//! Maps URL paths to application [`Page`]s. Patterns are `/`-separated
//! segments where `:name` captures one segment. Routes are tried in table
//! order and the first match wins, so static routes must precede dynamic
//! ones that would also match them (`/blog/preview/` before `/blog/:slug`).
//!
//! # Example
//!
//! ```rust
//! use storefront_api::router::{Page, Router};
//!
//! let router = Router::default();
//! let matched = router.resolve("/blog/summer-sale").unwrap();
//!
//! assert_eq!(matched.page, Page::BlogPost);
//! assert_eq!(matched.param("slug"), Some("summer-sale"));
//! assert!(router.resolve("/unknown").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;

/// Pages the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    /// The post listing.
    Blog,
    /// A single post, by `:slug`.
    BlogPost,
    /// An unpublished post opened from the CMS preview.
    BlogPreview,
    TagIndex,
    Contact,
    ShopHome,
}

impl Page {
    /// Returns the view name for this page.
    #[must_use]
    pub const fn view_name(&self) -> &'static str {
        match self {
            Self::Home => "HomePage",
            Self::About => "AboutPage",
            Self::Blog => "BlogPage",
            Self::BlogPost => "BlogPostView",
            Self::BlogPreview => "BlogPreviewView",
            Self::TagIndex => "TagIndexView",
            Self::Contact => "ContactPage",
            Self::ShopHome => "ShopHomePage",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.view_name())
    }
}

/// The application route table, in match order.
pub const APP_ROUTES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/about/", Page::About),
    ("/blog/", Page::Blog),
    ("/blog/preview/", Page::BlogPreview),
    ("/blog/:slug", Page::BlogPost),
    ("/tags/", Page::TagIndex),
    ("/contact/", Page::Contact),
    ("/shop/", Page::ShopHome),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route template such as `/blog/:slug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a template. Empty segments are ignored, so `/blog/` and
    /// `/blog` are the same pattern.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let segments = split_segments(template)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(segment.to_string()),
            })
            .collect();

        Self {
            template: template.to_string(),
            segments,
        }
    }

    /// Returns the template this pattern was parsed from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the names of the captured parameters, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    fn captures(&self, path_segments: &[&str]) -> Option<HashMap<String, String>> {
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, actual) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Static(expected) if expected == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    let value = urlencoding::decode(actual)
                        .map_or_else(|_| (*actual).to_string(), |decoded| decoded.into_owned());
                    params.insert(name.clone(), value);
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// A pattern paired with the page it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The parsed path template.
    pub pattern: RoutePattern,
    /// The page rendered on a match.
    pub page: Page,
}

impl Route {
    /// Parses `template` (e.g. `/blog/:slug`) into a route for `page`.
    #[must_use]
    pub fn new(template: &str, page: Page) -> Self {
        Self {
            pattern: RoutePattern::parse(template),
            page,
        }
    }
}

/// The result of a successful [`Router::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The page to render.
    pub page: Page,
    /// Template of the matched route.
    pub pattern: String,
    /// Captured parameters, percent-decoded.
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Returns a captured parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Resolves paths against an ordered route table.
#[derive(Debug, Clone)]
pub struct Router {
    base: Option<String>,
    routes: Vec<Route>,
}

impl Router {
    /// Creates a router over `routes`, tried in order.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { base: None, routes }
    }

    /// Creates the application router mounted under `base`.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self::default().mounted_at(base)
    }

    /// Mounts this router under `base`; paths outside it never match.
    /// An empty base or `/` mounts at the root.
    #[must_use]
    pub fn mounted_at(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        self.base = if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        };
        self
    }

    /// Returns the base prefix, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Returns the routes in match order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Finds the first route matching `path`.
    ///
    /// Query strings and fragments are ignored and a trailing slash is
    /// optional. Returns `None` if nothing matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let path = match &self.base {
            Some(base) => strip_base(path, base)?,
            None => path,
        };

        let segments: Vec<&str> = split_segments(path).collect();

        let matched = self.routes.iter().find_map(|route| {
            route.pattern.captures(&segments).map(|params| RouteMatch {
                page: route.page,
                pattern: route.pattern.template().to_string(),
                params,
            })
        });

        if matched.is_none() {
            tracing::debug!("No route matches {}", path);
        }
        matched
    }
}

impl Default for Router {
    /// The application route table.
    fn default() -> Self {
        Self::new(
            APP_ROUTES
                .iter()
                .map(|(template, page)| Route::new(template, *page))
                .collect(),
        )
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes_resolve_with_or_without_trailing_slash() {
        let router = Router::default();

        assert_eq!(router.resolve("/").unwrap().page, Page::Home);
        assert_eq!(router.resolve("").unwrap().page, Page::Home);
        assert_eq!(router.resolve("/about/").unwrap().page, Page::About);
        assert_eq!(router.resolve("/about").unwrap().page, Page::About);
        assert_eq!(router.resolve("/shop").unwrap().page, Page::ShopHome);
    }

    #[test]
    fn test_preview_wins_over_slug() {
        let matched = Router::default().resolve("/blog/preview/").unwrap();
        assert_eq!(matched.page, Page::BlogPreview);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_slug_is_captured_and_decoded() {
        let matched = Router::default().resolve("/blog/caf%C3%A9-news").unwrap();
        assert_eq!(matched.page, Page::BlogPost);
        assert_eq!(matched.pattern, "/blog/:slug");
        assert_eq!(matched.param("slug"), Some("café-news"));
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let matched = Router::default()
            .resolve("/blog/summer-sale?utm=x#comments")
            .unwrap();
        assert_eq!(matched.param("slug"), Some("summer-sale"));
    }

    #[test]
    fn test_unmatched_paths_return_none() {
        let router = Router::default();
        assert!(router.resolve("/unknown").is_none());
        assert!(router.resolve("/blog/a/b").is_none());
    }

    #[test]
    fn test_base_prefix_is_stripped() {
        let router = Router::with_base("/app/");

        assert_eq!(router.base(), Some("/app"));
        assert_eq!(router.resolve("/app").unwrap().page, Page::Home);
        assert_eq!(router.resolve("/app/contact/").unwrap().page, Page::Contact);
        assert!(router.resolve("/contact/").is_none());
        assert!(router.resolve("/application/contact/").is_none());
    }

    #[test]
    fn test_root_base_is_no_base() {
        assert!(Router::with_base("/").base().is_none());
    }

    #[test]
    fn test_pattern_param_names() {
        let pattern = RoutePattern::parse("/shop/:category/:slug/");
        let names: Vec<&str> = pattern.param_names().collect();
        assert_eq!(names, vec!["category", "slug"]);
        assert_eq!(pattern.to_string(), "/shop/:category/:slug/");
    }

    #[test]
    fn test_custom_table_first_match_wins() {
        let router = Router::new(vec![
            Route::new("/blog/:slug", Page::BlogPost),
            Route::new("/blog/preview", Page::BlogPreview),
        ]);
        assert_eq!(router.resolve("/blog/preview").unwrap().page, Page::BlogPost);
    }

    #[test]
    fn test_view_names() {
        assert_eq!(Page::TagIndex.view_name(), "TagIndexView");
        assert_eq!(Page::Home.to_string(), "HomePage");
    }
}
