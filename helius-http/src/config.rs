//! Transport configuration.

use std::time::Duration;

/// Query parameters that carry credentials and must never be logged.
pub const DEFAULT_REDACTED_PARAMS: &[&str] = &["api-key"];

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL that relative request paths are joined onto.
    pub base_url: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// How long an idle pooled connection is kept.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// User agent string.
    pub user_agent: String,
    /// Accept gzip-compressed responses.
    pub gzip: bool,
    /// Query parameter names whose values are masked in logs.
    pub redacted_params: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 8,
            default_headers: Vec::new(),
            user_agent: format!("helius-http/{}", env!("CARGO_PKG_VERSION")),
            gzip: true,
            redacted_params: DEFAULT_REDACTED_PARAMS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl HttpConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }

    /// Whether values of `param` must be masked before logging.
    pub fn is_redacted(&self, param: &str) -> bool {
        self.redacted_params.iter().any(|p| p == param)
    }
}

/// Builder for [`HttpConfig`].
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Add a header sent with every request.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn gzip(mut self, enable: bool) -> Self {
        self.config.gzip = enable;
        self
    }

    /// Mask an additional query parameter in logs.
    pub fn redact_param(mut self, param: impl Into<String>) -> Self {
        self.config.redacted_params.push(param.into());
        self
    }

    pub fn build(self) -> HttpConfig {
        self.config
    }
}
