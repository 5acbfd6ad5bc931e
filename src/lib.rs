// Helius - Async client for managing Helius webhooks
//
// This library re-exports the webhook client together with the HTTP transport
// it runs on and, behind the `config` feature, settings loading.

// Re-export the webhook client
pub use helius_webhooks::*;

// Re-export the transport crate
pub use helius_http;

// Re-export optional crates
#[cfg(feature = "config")]
pub use helius_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CreateWebhookRequest,
        EditWebhookRequest,
        Operation,
        TransactionType,
        Transport,
        TxnStatus,
        Webhook,
        WebhookClient,
        WebhookClientConfig,
        WebhookError,
        WebhookType,
    };

    #[cfg(feature = "config")]
    pub use helius_config::{Settings, SettingsLoader};
}
