//! Error types for webhook operations

use helius_http::HttpError;
use std::fmt;
use thiserror::Error;

/// The client operation an error originated from.
///
/// Displays as the name the webhook API documentation uses for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListWebhooks,
    GetWebhook,
    CreateWebhook,
    DeleteWebhook,
    EditWebhook,
    AppendAddresses,
    RemoveAddresses,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListWebhooks => "getWebhooks",
            Self::GetWebhook => "getWebhookByID",
            Self::CreateWebhook => "createWebhook",
            Self::DeleteWebhook => "deleteWebhook",
            Self::EditWebhook => "editWebhook",
            Self::AppendAddresses => "appendAddressesToWebhook",
            Self::RemoveAddresses => "removeAddressesFromWebhook",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`crate::WebhookClient`].
///
/// Every variant is tagged with the [`Operation`] that failed, and its
/// message always contains both the operation name and the cause.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The API answered with a non-success status.
    #[error("error calling {operation}: {message}")]
    Server {
        operation: Operation,
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, or the raw body text.
        message: String,
    },

    /// The request never produced a usable response: connection failure,
    /// timeout, or a success body that did not decode.
    #[error("error during {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: HttpError,
    },

    /// A local check failed; nothing was sent.
    #[error("error during {operation}: {message}")]
    Validation {
        operation: Operation,
        message: String,
    },
}

impl WebhookError {
    pub(crate) fn transport(operation: Operation, source: impl Into<HttpError>) -> Self {
        Self::Transport {
            operation,
            source: source.into(),
        }
    }

    pub(crate) fn validation(operation: Operation, message: impl Into<String>) -> Self {
        Self::Validation {
            operation,
            message: message.into(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Server { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Validation { operation, .. } => *operation,
        }
    }

    /// The cause text without the operation prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Server { message, .. } | Self::Validation { message, .. } => message.clone(),
            Self::Transport { source, .. } => source.to_string(),
        }
    }

    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
