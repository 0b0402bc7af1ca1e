//! Integration tests for middleware functionality.

use assert2::{check, let_assert};
use serde_json::json;
use spotify_web_api::middleware::{BearerAuthLayer, LoggingLayer};
use spotify_web_api::{HttpClientExt, HyperClient, Request, Scheme};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path},
};

fn request_to(server: &MockServer, request_path: &str) -> spotify_web_api::RequestBuilder {
    let address = server.address();
    Request::builder()
        .scheme(Scheme::Http)
        .host(address.ip().to_string())
        .port(address.port())
        .path(request_path)
}

/// Test that bearer auth middleware adds the Authorization header.
#[tokio::test]
async fn test_bearer_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("Authorization", "Bearer layer-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wizzler"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder().with_bearer_auth("layer-token").build();
    let request = request_to(&mock_server, "/v1/me").build().expect("request");

    let_assert!(Ok(payload) = client.get(&request).await);
    check!(payload.contains("wizzler"));
}

/// Test that a token set on the request is not overridden.
#[tokio::test]
async fn test_request_token_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("Authorization", "Bearer request-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wizzler"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .layer(BearerAuthLayer::new("layer-token"))
        .build();
    let request = request_to(&mock_server, "/v1/me")
        .access_token("request-token")
        .build()
        .expect("request");

    check!(client.get(&request).await.is_ok());
}

/// Test that logging middleware doesn't break the request/response flow.
#[tokio::test]
async fn test_logging_middleware() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder().with_debug_logging().build();
    let request = request_to(&mock_server, "/v1/tracks/missing")
        .build()
        .expect("request");

    let_assert!(Err(err) = client.get(&request).await);
    check!(err.is_not_found());
}

/// Test multiple middleware composed together.
#[tokio::test]
async fn test_middleware_composition() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/playlists/abc/followers"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .with_defaults()
        .with_bearer_auth("test-token")
        .layer(LoggingLayer::debug())
        .build();
    let request = request_to(&mock_server, "/v1/playlists/abc/followers")
        .build()
        .expect("request");

    let_assert!(Ok(payload) = client.delete(&request).await);
    check!(payload.is_empty());
}

/// Test that failures are not retried.
#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder().with_defaults().build();
    let request = request_to(&mock_server, "/v1/me").build().expect("request");

    let_assert!(Err(err) = client.get(&request).await);
    check!(err.is_server_error());
}
