//! End-to-end tests for the webhook client against a mock Helius API.

use helius_webhooks::{
    CreateWebhookRequest, EditWebhookRequest, Operation, TransactionType, TxnStatus, WebhookClient,
    WebhookClientConfig, WebhookType,
};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "integration-key";

fn client_for(server: &MockServer) -> WebhookClient {
    let config = WebhookClientConfig::builder(API_KEY)
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    WebhookClient::with_config(config).unwrap()
}

fn stored_webhook(addresses: Vec<String>) -> Value {
    json!({
        "webhookID": "wh-1",
        "wallet": "wallet-1",
        "project": "project-1",
        "webhookURL": "https://example.com/hook",
        "transactionTypes": ["NFT_SALE", "SWAP"],
        "accountAddresses": addresses,
        "webhookType": "enhanced",
        "authHeader": "Bearer old",
        "txnStatus": "all",
        "active": true
    })
}

#[tokio::test]
async fn test_list_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/webhooks"))
        .and(query_param("api-key", API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([stored_webhook(vec![]), stored_webhook(vec![])])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let webhooks = client_for(&server).list_all().await.unwrap();

    assert_eq!(webhooks.len(), 2);
    assert_eq!(webhooks[0].webhook_type, Some(WebhookType::Enhanced));
}

#[tokio::test]
async fn test_list_all_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client_for(&server).list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_tolerates_unknown_enum_values() {
    let server = MockServer::start().await;
    let mut newer = stored_webhook(vec![]);
    newer["webhookType"] = json!("enhancedTestnet");
    newer["txnStatus"] = json!("pending");
    newer["transactionTypes"] = json!(["NFT_SALE", "BRAND_NEW_TYPE"]);
    Mock::given(method("GET"))
        .and(path("/v0/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_webhook(vec![]), newer])))
        .mount(&server)
        .await;

    let webhooks = client_for(&server).list_all().await.unwrap();

    assert_eq!(webhooks.len(), 2);
    assert_eq!(webhooks[1].webhook_type, Some(WebhookType::from("enhancedTestnet")));
    assert_eq!(webhooks[1].txn_status, Some(TxnStatus::Other("pending".to_string())));
    assert_eq!(
        webhooks[1].transaction_types[1],
        TransactionType::Other("BRAND_NEW_TYPE".to_string())
    );
}

#[tokio::test]
async fn test_get_by_id_returns_object_unchanged() {
    let server = MockServer::start().await;
    let stored = stored_webhook(vec!["a1".to_string(), "a2".to_string()]);
    Mock::given(method("GET"))
        .and(path("/v0/webhooks/wh-1"))
        .and(query_param("api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = client_for(&server).get_by_id("wh-1").await.unwrap();

    assert_eq!(webhook.webhook_id, "wh-1");
    assert_eq!(webhook.txn_status, Some(TxnStatus::All));
    assert_eq!(serde_json::to_value(&webhook).unwrap(), stored);
}

#[tokio::test]
async fn test_create() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/webhooks"))
        .and(query_param("api-key", API_KEY))
        .and(body_json(json!({
            "webhookURL": "https://example.com/hook",
            "transactionTypes": ["NFT_SALE", "SWAP"],
            "accountAddresses": ["a1"],
            "webhookType": "enhanced"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_webhook(vec!["a1".into()])))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateWebhookRequest::new(
        "https://example.com/hook",
        [TransactionType::NftSale, TransactionType::Swap],
        ["a1"],
    )
    .with_webhook_type(WebhookType::Enhanced);

    let webhook = client_for(&server).create(&request).await.unwrap();
    assert_eq!(webhook.webhook_id, "wh-1");
    assert_eq!(webhook.account_addresses, vec!["a1"]);
}

#[tokio::test]
async fn test_edit_reads_then_writes_merged_object() {
    let server = MockServer::start().await;
    let stored = stored_webhook(vec!["a1".to_string()]);

    let mut merged = stored.clone();
    merged["webhookURL"] = json!("https://example.com/new");
    merged["txnStatus"] = json!("failed");

    Mock::given(method("GET"))
        .and(path("/v0/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v0/webhooks/wh-1"))
        .and(query_param("api-key", API_KEY))
        .and(body_json(merged.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(merged))
        .expect(1)
        .mount(&server)
        .await;

    let edit = EditWebhookRequest::new()
        .webhook_url("https://example.com/new")
        .txn_status(TxnStatus::Failed);
    let updated = client_for(&server).edit("wh-1", &edit).await.unwrap();

    assert_eq!(updated.webhook_url, "https://example.com/new");
    assert_eq!(updated.auth_header.as_deref(), Some("Bearer old"));
    assert_eq!(updated.extra.get("active"), Some(&json!(true)));
}

#[tokio::test]
async fn test_edit_of_missing_webhook_never_writes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/webhooks/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "webhook not found"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .edit("missing", &EditWebhookRequest::new().auth_header("x"))
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Operation::EditWebhook);
    assert_eq!(err.to_string(), "error calling editWebhook: webhook not found");
}

#[tokio::test]
async fn test_append_addresses() {
    let server = MockServer::start().await;
    let stored = stored_webhook(vec!["a1".to_string()]);

    let mut expected = stored.clone();
    expected["accountAddresses"] = json!(["a1", "a2", "a3"]);

    Mock::given(method("GET"))
        .and(path("/v0/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v0/webhooks/wh-1"))
        .and(body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(expected))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .append_addresses("wh-1", &["a2", "a3"])
        .await
        .unwrap();

    assert_eq!(updated.account_addresses, vec!["a1", "a2", "a3"]);
}

#[tokio::test]
async fn test_append_over_capacity_is_rejected_before_write() {
    let server = MockServer::start().await;
    let existing: Vec<String> = (0..9_960).map(|i| format!("existing-{}", i)).collect();

    Mock::given(method("GET"))
        .and(path("/v0/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_webhook(existing)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let new: Vec<String> = (0..50).map(|i| format!("new-{}", i)).collect();
    let err = client_for(&server)
        .append_addresses("wh-1", &new)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("appendAddressesToWebhook"));
    assert!(err.to_string().contains("10,000"));
}

#[tokio::test]
async fn test_remove_addresses() {
    let server = MockServer::start().await;
    let stored = stored_webhook(vec!["a1".into(), "a2".into(), "a3".into()]);

    let mut expected = stored.clone();
    expected["accountAddresses"] = json!(["a1", "a3"]);

    Mock::given(method("GET"))
        .and(path("/v0/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v0/webhooks/wh-1"))
        .and(body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(expected))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .remove_addresses("wh-1", &["a2"])
        .await
        .unwrap();

    assert_eq!(updated.account_addresses, vec!["a1", "a3"]);
}

#[tokio::test]
async fn test_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v0/webhooks/wh-1"))
        .and(query_param("api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).delete("wh-1").await.unwrap());
}

#[tokio::test]
async fn test_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/webhooks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid api key"})))
        .mount(&server)
        .await;

    let err = client_for(&server).list_all().await.unwrap_err();

    assert!(err.is_server());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "error calling getWebhooks: invalid api key");
}

#[tokio::test]
async fn test_connection_failure() {
    let config = WebhookClientConfig::builder(API_KEY)
        .base_url("http://127.0.0.1:1")
        .connect_timeout(Duration::from_secs(2))
        .build();
    let client = WebhookClient::with_config(config).unwrap();

    let err = client.get_by_id("wh-1").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.operation(), Operation::GetWebhook);
    assert!(err.to_string().starts_with("error during getWebhookByID: "));
}
