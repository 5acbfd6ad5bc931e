//! Webhook management for the Helius API
//!
//! This crate manages the webhooks registered on a Helius account: listing,
//! fetching, creating, editing and deleting them, and growing or shrinking
//! the set of account addresses a webhook watches.
//!
//! # Features
//!
//! - **CRUD**: one call per endpoint, with typed request and response models
//! - **Partial edits**: change selected fields, the rest are kept as stored
//! - **Address management**: append with a 10,000-address capacity check made
//!   before anything is written, or remove addresses
//! - **Typed errors**: every failure names the operation it came from
//! - **Pluggable transport**: swap the HTTP layer for tests or proxies
//!
//! # Example: Creating a Webhook
//!
//! ```rust,no_run
//! use helius_webhooks::{CreateWebhookRequest, TransactionType, WebhookClient, WebhookType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebhookClient::new("your-api-key")?;
//!
//!     let request = CreateWebhookRequest::new(
//!         "https://example.com/webhook",
//!         [TransactionType::NftSale],
//!         ["M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K"],
//!     )
//!     .with_webhook_type(WebhookType::Enhanced);
//!
//!     let webhook = client.create(&request).await?;
//!     println!("created {}", webhook.webhook_id);
//!     Ok(())
//! }
//! ```
//!
//! # Example: Editing a Webhook
//!
//! ```rust,no_run
//! use helius_webhooks::{EditWebhookRequest, WebhookClient};
//!
//! # async fn run(client: WebhookClient) -> helius_webhooks::Result<()> {
//! let edit = EditWebhookRequest::new().webhook_url("https://example.com/new-endpoint");
//! client.edit("webhook-id", &edit).await?;
//!
//! client
//!     .append_addresses("webhook-id", &["86xCnPeV69n6t3DnyGvkKobf9FdN2H9oiVDdaMpo2MMY"])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Edits and address changes read the webhook and write the whole object
//! back; concurrent updates to the same webhook can overwrite each other.
//! See [`WebhookClient`] for details.

mod client;
mod config;
mod error;
mod request;
mod transport;
mod webhook;

pub use client::WebhookClient;
pub use config::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, WebhookClientConfig, WebhookClientConfigBuilder,
};
pub use error::{Operation, WebhookError};
pub use request::{CreateWebhookRequest, EditWebhookRequest};
pub use transport::{ApiRequest, Transport};
pub use webhook::{
    ADDRESS_CAPACITY_MESSAGE, MAX_ADDRESSES_PER_WEBHOOK, TransactionType, TxnStatus, Webhook,
    WebhookType,
};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
