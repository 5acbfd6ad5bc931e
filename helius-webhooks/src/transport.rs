//! The seam between the webhook client and the network.

use async_trait::async_trait;
use helius_http::{HttpTransport, Method, Response, Url};
use serde_json::Value;

/// One call to the webhook API, fully resolved: the URL already carries the
/// API key.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

/// Executes [`ApiRequest`]s.
///
/// Implementations return any response the server produced, including
/// non-2xx ones, and an error only when no response was obtained. They are
/// expected to make a single attempt; timeouts and cancellation are theirs
/// to enforce.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> helius_http::Result<Response>;
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> helius_http::Result<Response> {
        let mut builder = self.request(request.method, request.url.as_str());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.send().await
    }
}
