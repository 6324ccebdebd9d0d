//! Integration tests for the transport layer.
//!
//! These tests run [`ApiClient`] against a local mock backend and cover:
//! - URL construction and JSON decoding on GET
//! - Status-bearing error messages for GET failures
//! - JSON bodies, cookies and the CSRF header on POST
//! - Backend error messages surfaced verbatim on mutations
//! - Network and decode failures naming the path

use std::sync::Arc;

use serde_json::json;
use storefront_api::{
    ApiClient, ApiConfig, BaseUrl, CredentialProvider, HttpError, HttpMethod, HttpRequest,
    NoCredentials, StaticCookies,
};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn client_with(server: &MockServer, credentials: Arc<dyn CredentialProvider>) -> ApiClient {
    ApiClient::new(&config_for(server), credentials)
}

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Detail {
    detail: String,
}

#[tokio::test]
async fn test_get_decodes_json_from_base_url_plus_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/home/"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "hi"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let reply: Detail = client.get("/home/").await.unwrap();

    assert_eq!(reply.detail, "hi");
}

#[tokio::test]
async fn test_get_error_message_contains_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/store/products/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Not Found"})),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let error = client
        .get::<serde_json::Value>("/store/products/99")
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("404"));
    assert_eq!(error.to_string(), "API error: 404 Not Found");
}

#[tokio::test]
async fn test_get_sends_cookies_but_no_csrf_header() {
    let server = MockServer::start().await;
    Mock::given(header_exists("X-CSRFToken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart/items"))
        .and(header("Cookie", "sessionid=abc; csrftoken=tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": [], "cart_qty": 0, "total": 0.0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        Arc::new(StaticCookies::new("sessionid=abc; csrftoken=tok")),
    );
    let cart: serde_json::Value = client.get("/cart/items").await.unwrap();

    assert_eq!(cart["cart_qty"], 0);
}

#[tokio::test]
async fn test_post_sends_json_body_cookies_and_csrf() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cart/update"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-CSRFToken", "tok=1"))
        .and(header("Cookie", "sessionid=abc; csrftoken=tok%3D1"))
        .and(body_json(json!({"product_id": 7, "product_qty": 2})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"cart_qty": 2, "product_qty": 2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        Arc::new(StaticCookies::new("sessionid=abc; csrftoken=tok%3D1")),
    );
    let reply: serde_json::Value = client
        .post("/cart/update", &json!({"product_id": 7, "product_qty": 2}))
        .await
        .unwrap();

    assert_eq!(reply["cart_qty"], 2);
}

#[tokio::test]
async fn test_post_without_csrf_cookie_omits_header() {
    let server = MockServer::start().await;
    Mock::given(header_exists("X-CSRFToken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/logout"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "bye"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(StaticCookies::new("sessionid=abc")));
    let reply: Detail = client.post("/accounts/logout", &json!({})).await.unwrap();

    assert_eq!(reply.detail, "bye");
}

#[tokio::test]
async fn test_post_error_uses_backend_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cart/apply-coupon"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid coupon"})),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let error = client
        .post::<_, serde_json::Value>("/cart/apply-coupon", &json!({"coupon_code": "NOPE"}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Invalid coupon");
    assert_eq!(error.status(), Some(400));
}

#[tokio::test]
async fn test_post_error_falls_back_to_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/accounts/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let error = client
        .post::<_, Detail>("/accounts/login", &json!({"username": "a", "password": "b"}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_post_error_with_unparsable_body_contains_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments/complete-order"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Server Error</html>"))
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let error = client
        .post::<_, Detail>("/payments/complete-order", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Response(_)));
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn test_success_with_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/about/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(NoCredentials));
    let error = client.get::<Detail>("/about/").await.unwrap_err();

    assert!(matches!(error, HttpError::Decode { .. }));
    assert!(error.to_string().contains("/about/"));
}

#[tokio::test]
async fn test_network_failure_names_the_path() {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1/api").unwrap())
        .build()
        .unwrap();
    let client = ApiClient::new(&config, Arc::new(NoCredentials));

    let error = client.get::<Detail>("/home/").await.unwrap_err();

    assert!(matches!(error, HttpError::Network { .. }));
    assert!(error.to_string().starts_with("Failed to fetch /home/:"));
    assert!(error.status().is_none());
}

#[tokio::test]
async fn test_send_can_disable_credentials() {
    let server = MockServer::start().await;
    Mock::given(header_exists("Cookie"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blog/posts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(StaticCookies::new("sessionid=abc")));
    let request = HttpRequest::builder(HttpMethod::Get, "/blog/posts/")
        .with_credentials(false)
        .build()
        .unwrap();
    let posts: Vec<serde_json::Value> = client.send(request).await.unwrap();

    assert!(posts.is_empty());
}
