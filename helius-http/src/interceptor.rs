//! Request and response interceptors.

use crate::{Response, Result};
use async_trait::async_trait;
use reqwest::Request;
use url::Url;

/// Hook run around every exchange made by [`crate::HttpTransport`].
///
/// Both methods default to passing the value through untouched. Returning
/// an error aborts the exchange.
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn intercept_request(&self, request: Request) -> Result<Request> {
        Ok(request)
    }

    async fn intercept_response(&self, response: Response) -> Result<Response> {
        Ok(response)
    }
}

/// Emits a `tracing` event per request and response.
///
/// Values of the listed query parameters are replaced with `***` so that
/// credentials passed in the query string never reach the logs.
#[derive(Debug, Clone)]
pub struct LoggingInterceptor {
    redacted: Vec<String>,
    log_headers: bool,
}

impl LoggingInterceptor {
    pub fn new(redacted: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            redacted: redacted.into_iter().map(Into::into).collect(),
            log_headers: false,
        }
    }

    /// Also log header names (never values) at trace level.
    pub fn with_headers(mut self) -> Self {
        self.log_headers = true;
        self
    }

    /// Copy of `url` with redacted query values masked.
    pub fn redact(&self, url: &Url) -> String {
        if url.query().is_none() {
            return url.to_string();
        }

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if self.redacted.iter().any(|r| *r == k) {
                    "***".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();

        let mut masked = url.clone();
        masked.query_pairs_mut().clear().extend_pairs(pairs);
        masked.to_string()
    }
}

impl Default for LoggingInterceptor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_REDACTED_PARAMS.iter().copied())
    }
}

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept_request(&self, request: Request) -> Result<Request> {
        tracing::debug!(
            method = %request.method(),
            url = %self.redact(request.url()),
            "Sending HTTP request"
        );

        if self.log_headers {
            for name in request.headers().keys() {
                tracing::trace!(header = %name, "Request header");
            }
        }

        Ok(request)
    }

    async fn intercept_response(&self, response: Response) -> Result<Response> {
        tracing::debug!(
            status = %response.status(),
            url = %self.redact(response.url()),
            bytes = response.bytes().len(),
            "Received HTTP response"
        );
        Ok(response)
    }
}
