//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url_for(server: &MockServer, path_and_query: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), path_and_query)).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("discovery-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/abc"))
        .and(query_param("apikey", "k3y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc",
            "name": "Concert",
            "dates": {"start": {"localDate": "2024-06-01"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let doc = client
        .get_document(&url_for(&mock_server, "/events/abc?apikey=k3y"))
        .await
        .unwrap();

    assert_eq!(doc["name"], "Concert");
    assert_eq!(doc["dates"]["start"]["localDate"], "2024-06-01");
}

#[tokio::test]
async fn test_get_document_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_document(&url_for(&mock_server, "/events/missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("not found"));
}

#[tokio::test]
async fn test_non_200_success_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_text(&url_for(&mock_server, "/events"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"abc\", "))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result = client
        .get_document(&url_for(&mock_server, "/events/abc"))
        .await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_non_object_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result = client
        .get_document(&url_for(&mock_server, "/events/abc"))
        .await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_default_headers_and_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues"))
        .and(header("user-agent", "test-agent/1.0"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .user_agent("test-agent/1.0")
        .header("Accept", "application/json")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let doc = client
        .get_document(&url_for(&mock_server, "/venues"))
        .await
        .unwrap();

    assert!(doc.is_empty());
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_text(&url_for(&mock_server, "/events"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_network_error_hides_api_key() {
    // Nothing listens on a port we just released.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = Url::parse(&format!("http://127.0.0.1:{port}/events?apikey=sup3rs3cret")).unwrap();

    let client = HttpClient::new().unwrap();
    let err = client.get_text(&url).await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert!(!err.to_string().contains("sup3rs3cret"));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
