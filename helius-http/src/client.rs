//! HTTP transport implementation.

use http::Method;
use reqwest::Request;
use std::sync::Arc;
use tracing::warn;

use crate::{HttpConfig, HttpError, Interceptor, RequestBuilder, Response, Result};

/// Pooled JSON transport over reqwest.
///
/// Sends exactly one attempt per request: there is no retry, backoff, or
/// circuit breaking at this layer. Cheap to clone.
#[derive(Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: Arc<HttpConfig>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.gzip)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            interceptors: Vec::new(),
        })
    }

    /// Register an interceptor; interceptors run in registration order.
    pub fn with_interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub(crate) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, url.into())
    }

    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, url.into())
    }

    pub fn put(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, url.into())
    }

    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, url.into())
    }

    /// Create a request builder with an arbitrary method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }

    /// Run the interceptor chain around a single send.
    pub(crate) async fn dispatch(&self, mut request: Request) -> Result<Response> {
        for interceptor in &self.interceptors {
            request = interceptor.intercept_request(request).await?;
        }

        let method = request.method().clone();
        let response = match self.inner.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, error = %e, timeout = e.is_timeout(), "HTTP request failed");
                return Err(HttpError::from(e));
            }
        };

        let mut response = Response::from_reqwest(response).await?;
        for interceptor in &self.interceptors {
            response = interceptor.intercept_response(response).await?;
        }

        Ok(response)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}
