//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors raised while building, sending, or reading an HTTP exchange.
///
/// A non-2xx status is *not* an error at this layer; callers decide what a
/// status means for them.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request URL could not be formed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be assembled (bad header, unserializable body).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// The response body was not valid JSON for the requested type.
    #[error("JSON error: {0}")]
    Json(String),

    /// The response body could not be read off the wire.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// An interceptor rejected the exchange.
    #[error("Interceptor error: {0}")]
    Interceptor(String),

    /// Underlying reqwest failure (connect, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HttpError {
    /// Check if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if the connection could not be established.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Json(err.to_string())
    }
}
