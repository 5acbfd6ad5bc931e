//! Integration tests for helius-http against a local mock server.

use helius_http::{HttpConfig, HttpError, HttpTransport, LoggingInterceptor, StatusCode};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(
        HttpConfig::builder()
            .base_url(format!("{}/", server.uri()))
            .default_header("x-client", "tests")
            .build(),
    )
    .unwrap()
    .with_interceptor(LoggingInterceptor::default())
}

#[tokio::test]
async fn test_get_with_query_and_default_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/webhooks"))
        .and(query_param("api-key", "secret"))
        .and(header("x-client", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"webhookID": "a"}])))
        .expect(1)
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .get("v0/webhooks")
        .query("api-key", "secret")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body[0]["webhookID"], "a");
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v0/webhooks/abc"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"webhookURL": "https://example.com/hook"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .put("v0/webhooks/abc")
        .json(&json!({"webhookURL": "https://example.com/hook"}))
        .send()
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_error_status_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v0/webhooks/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let response = transport_for(&server)
        .delete("v0/webhooks/missing")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_per_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let result = transport_for(&server)
        .get("slow")
        .timeout(Duration::from_millis(50))
        .send()
        .await;

    match result {
        Err(err @ HttpError::Http(_)) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let transport = HttpTransport::new(HttpConfig::default()).unwrap();
    let result = transport.get("http://127.0.0.1:1/v0/webhooks").send().await;
    assert!(matches!(result, Err(HttpError::Http(_))));
}

#[tokio::test]
async fn test_post_with_header_logging() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/webhooks"))
        .and(header("x-request", "create"))
        .and(body_json(json!({"accountAddresses": ["a1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"webhookID": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(
        HttpConfig::builder()
            .base_url(format!("{}/", server.uri()))
            .build(),
    )
    .unwrap()
    .with_interceptor(LoggingInterceptor::default().with_headers());

    let response = transport
        .post("v0/webhooks")
        .header("x-request", "create")
        .json(&json!({"accountAddresses": ["a1"]}))
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["webhookID"], "new");
}
