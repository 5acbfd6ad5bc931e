//! Webhook management client

use crate::{
    ADDRESS_CAPACITY_MESSAGE, ApiRequest, CreateWebhookRequest, EditWebhookRequest, Operation,
    Result, Transport, Webhook, WebhookClientConfig, WebhookError,
};
use helius_http::{HttpError, HttpTransport, LoggingInterceptor, Method, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the webhook endpoints of the Helius API.
///
/// Every method is a single, stateless call that can be retried by the
/// caller; the client itself never retries, caches, or rate-limits. Clones
/// share the same transport.
///
/// # Concurrent updates
///
/// [`edit`](Self::edit), [`append_addresses`](Self::append_addresses) and
/// [`remove_addresses`](Self::remove_addresses) fetch the webhook and then
/// write the whole merged object back. The API offers no version token, so
/// two such calls racing on the same webhook can each start from the same
/// snapshot, and the later write silently discards the earlier one. Callers
/// that update one webhook from several tasks must serialize those calls.
///
/// The body written back is the object the server returned with the changed
/// fields laid over it, so fields the server sent as `null` stay `null`.
#[derive(Clone)]
pub struct WebhookClient {
    config: Arc<WebhookClientConfig>,
    transport: Arc<dyn Transport>,
}

impl WebhookClient {
    /// Create a client for `api_key` with default settings.
    ///
    /// No request is made and the key is not checked.
    pub fn new(api_key: impl Into<String>) -> std::result::Result<Self, HttpError> {
        Self::with_config(WebhookClientConfig::new(api_key))
    }

    /// Create a client over the default HTTP transport.
    pub fn with_config(config: WebhookClientConfig) -> std::result::Result<Self, HttpError> {
        let transport = HttpTransport::new(config.http.clone())?.with_interceptor(
            LoggingInterceptor::new(config.http.redacted_params.iter().cloned()),
        );
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: WebhookClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &WebhookClientConfig {
        &self.config
    }

    /// List every webhook on the account.
    pub async fn list_all(&self) -> Result<Vec<Webhook>> {
        let operation = Operation::ListWebhooks;
        let response = self.call(operation, Method::GET, None, None).await?;
        decode(operation, &response)
    }

    /// Fetch one webhook. The id is sent as given.
    pub async fn get_by_id(&self, id: &str) -> Result<Webhook> {
        self.fetch(Operation::GetWebhook, id).await
    }

    /// Create a webhook and return it with its server-assigned id.
    pub async fn create(&self, request: &CreateWebhookRequest) -> Result<Webhook> {
        let operation = Operation::CreateWebhook;
        let body = to_body(operation, request)?;
        let response = self.call(operation, Method::POST, None, Some(body)).await?;
        let webhook: Webhook = decode(operation, &response)?;

        info!(webhook_id = %webhook.webhook_id, "Created webhook");
        Ok(webhook)
    }

    /// Delete a webhook.
    ///
    /// Always `Ok(true)` on success; every failure is an `Err`, never
    /// `Ok(false)`.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.call(Operation::DeleteWebhook, Method::DELETE, Some(id), None)
            .await?;

        info!(webhook_id = %id, "Deleted webhook");
        Ok(true)
    }

    /// Change the fields set on `request`, leaving the rest as stored.
    ///
    /// Fetches the webhook, merges, and sends the complete object back. See
    /// the type-level docs for the lost-update race this implies.
    pub async fn edit(&self, id: &str, request: &EditWebhookRequest) -> Result<Webhook> {
        let operation = Operation::EditWebhook;
        let (stored, webhook) = self.snapshot(operation, id).await?;
        self.store(operation, id, stored, &webhook.merged_with(request))
            .await
    }

    /// Add addresses to the end of the webhook's address list.
    ///
    /// Addresses already present are added again. If the result would hold
    /// more than [`crate::MAX_ADDRESSES_PER_WEBHOOK`] entries, a
    /// [`WebhookError::Validation`] is returned and nothing is written.
    pub async fn append_addresses<S: AsRef<str>>(
        &self,
        id: &str,
        addresses: &[S],
    ) -> Result<Webhook> {
        let operation = Operation::AppendAddresses;
        let (stored, mut webhook) = self.snapshot(operation, id).await?;
        let existing = webhook.account_addresses.len();

        webhook.extend_addresses(addresses.iter().map(|a| a.as_ref()));
        if webhook.exceeds_address_capacity() {
            warn!(
                webhook_id = %id,
                existing,
                appended = addresses.len(),
                "Refusing to exceed webhook address capacity"
            );
            return Err(WebhookError::validation(operation, ADDRESS_CAPACITY_MESSAGE));
        }

        self.store(operation, id, stored, &webhook).await
    }

    /// Remove every occurrence of the given addresses from the webhook.
    ///
    /// Same fetch-then-write protocol as [`edit`](Self::edit). Addresses
    /// that are not present are ignored; the write happens regardless.
    pub async fn remove_addresses<S: AsRef<str>>(
        &self,
        id: &str,
        addresses: &[S],
    ) -> Result<Webhook> {
        let operation = Operation::RemoveAddresses;
        let (stored, mut webhook) = self.snapshot(operation, id).await?;

        let removed = webhook.remove_addresses(addresses);
        debug!(webhook_id = %id, removed, "Removed addresses from webhook");

        self.store(operation, id, stored, &webhook).await
    }

    /// GET a single webhook, reporting failures under `operation`.
    async fn fetch(&self, operation: Operation, id: &str) -> Result<Webhook> {
        let response = self.call(operation, Method::GET, Some(id), None).await?;
        decode(operation, &response)
    }

    /// Like [`fetch`](Self::fetch), also returning the object as sent.
    async fn snapshot(
        &self,
        operation: Operation,
        id: &str,
    ) -> Result<(Map<String, Value>, Webhook)> {
        let response = self.call(operation, Method::GET, Some(id), None).await?;
        let stored: Map<String, Value> = decode(operation, &response)?;
        let webhook = serde_json::from_value(Value::Object(stored.clone()))
            .map_err(|e| WebhookError::transport(operation, e))?;
        Ok((stored, webhook))
    }

    /// PUT `stored` with `webhook` laid over it and return the server's copy.
    async fn store(
        &self,
        operation: Operation,
        id: &str,
        mut stored: Map<String, Value>,
        webhook: &Webhook,
    ) -> Result<Webhook> {
        if let Value::Object(fields) = to_body(operation, webhook)? {
            stored.extend(fields);
        }
        let response = self
            .call(operation, Method::PUT, Some(id), Some(Value::Object(stored)))
            .await?;
        decode(operation, &response)
    }

    /// `{base_url}/{api_version}/webhooks[/{id}]?api-key=...`
    fn endpoint(&self, id: Option<&str>) -> std::result::Result<Url, HttpError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| HttpError::InvalidUrl(format!("{} cannot be a base URL", base)))?;
            segments
                .pop_if_empty()
                .push(&self.config.api_version)
                .push("webhooks");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url.query_pairs_mut()
            .append_pair("api-key", &self.config.api_key);
        Ok(url)
    }

    async fn call(
        &self,
        operation: Operation,
        method: Method,
        id: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response> {
        let url = self
            .endpoint(id)
            .map_err(|e| WebhookError::transport(operation, e))?;

        debug!(%operation, %method, webhook_id = id.unwrap_or(""), "Calling webhook API");

        let response = self
            .transport
            .execute(ApiRequest { method, url, body })
            .await
            .map_err(|e| {
                warn!(%operation, error = %e, "Webhook API call failed");
                WebhookError::transport(operation, e)
            })?;

        if !response.is_success() {
            let error = server_error(operation, &response);
            warn!(%operation, status = response.status().as_u16(), error = %error, "Webhook API returned an error");
            return Err(error);
        }

        Ok(response)
    }
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Error payload returned by the API on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Build the error for a non-2xx response.
///
/// Prefers the body's `error` field, then the raw body text, then the
/// status reason.
fn server_error(operation: Operation, response: &Response) -> WebhookError {
    let status = response.status();
    let message = match response.json::<ErrorBody>() {
        Ok(body) => body.error,
        Err(_) => match response.text() {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string()),
        },
    };

    WebhookError::Server {
        operation,
        status: status.as_u16(),
        message,
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, response: &Response) -> Result<T> {
    response
        .json()
        .map_err(|e| WebhookError::transport(operation, e))
}

fn to_body<T: serde::Serialize>(operation: Operation, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| WebhookError::transport(operation, e))
}
