//! Configuration for the webhook client

use helius_http::HttpConfig;
use std::fmt;
use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.helius.xyz";

/// API version prefixed to every webhook path.
pub const DEFAULT_API_VERSION: &str = "v0";

/// Configuration for [`crate::WebhookClient`].
///
/// Requests go to `{base_url}/{api_version}/webhooks`, with the API key
/// passed as the `api-key` query parameter.
#[derive(Clone)]
pub struct WebhookClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    /// Settings for the default HTTP transport.
    pub http: HttpConfig,
}

impl WebhookClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            http: default_http_config(),
        }
    }

    pub fn builder(api_key: impl Into<String>) -> WebhookClientConfigBuilder {
        WebhookClientConfigBuilder::new(api_key)
    }

    /// Build from loaded [`helius_config::Settings`].
    #[cfg(feature = "config")]
    pub fn from_settings(settings: &helius_config::Settings) -> Self {
        let mut http = default_http_config();
        http.timeout = Duration::from_secs(settings.timeout_secs);
        http.connect_timeout = Duration::from_secs(settings.connect_timeout_secs);
        if let Some(user_agent) = &settings.user_agent {
            http.user_agent = user_agent.clone();
        }

        Self {
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            api_version: settings.api_version.clone(),
            http,
        }
    }
}

fn default_http_config() -> HttpConfig {
    HttpConfig::builder()
        .user_agent(format!("helius-webhooks/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

impl fmt::Debug for WebhookClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("http", &self.http)
            .finish()
    }
}

/// Builder for [`WebhookClientConfig`]
#[derive(Debug, Clone)]
pub struct WebhookClientConfigBuilder {
    config: WebhookClientConfig,
}

impl WebhookClientConfigBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: WebhookClientConfig::new(api_key),
        }
    }

    /// Point the client at another host, e.g. a devnet endpoint or a proxy.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.http.user_agent = user_agent.into();
        self
    }

    /// Replace the whole transport configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.config.http = http;
        self
    }

    pub fn build(self) -> WebhookClientConfig {
        self.config
    }
}
