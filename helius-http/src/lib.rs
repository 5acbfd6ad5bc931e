//! # Helius HTTP
//!
//! The JSON-over-HTTP transport shared by the Helius API clients.
//!
//! ## Features
//!
//! - **Connection pooling** and gzip through reqwest
//! - **Timeouts**: whole-request, connect, and per-request overrides
//! - **Buffered responses**: status and body are available after the call, so
//!   callers can decode error payloads themselves
//! - **Interceptors**: hooks around every exchange, with a logging
//!   interceptor that masks credential query parameters
//!
//! Non-2xx statuses are returned as ordinary [`Response`]s. The transport
//! makes exactly one attempt per request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helius_http::{HttpConfig, HttpTransport, LoggingInterceptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(
//!         HttpConfig::builder().base_url("https://api.helius.xyz/").build(),
//!     )?
//!     .with_interceptor(LoggingInterceptor::default());
//!
//!     let response = transport
//!         .get("v0/webhooks")
//!         .query("api-key", "<key>")
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod interceptor;
mod request;
mod response;

pub use client::HttpTransport;
pub use config::{DEFAULT_REDACTED_PARAMS, HttpConfig, HttpConfigBuilder};
pub use error::{HttpError, Result};
pub use interceptor::{Interceptor, LoggingInterceptor};
pub use request::RequestBuilder;
pub use response::Response;

pub use bytes::Bytes;
pub use http::{Method, StatusCode};
pub use url::Url;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::client::HttpTransport;
    pub use crate::config::{HttpConfig, HttpConfigBuilder};
    pub use crate::error::{HttpError, Result};
    pub use crate::interceptor::{Interceptor, LoggingInterceptor};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{Method, StatusCode};
}
