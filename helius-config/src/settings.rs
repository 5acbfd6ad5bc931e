// Client settings and their layered loader

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.helius.xyz";
pub const DEFAULT_API_VERSION: &str = "v0";

/// Settings needed to talk to the Helius REST API.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: None,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Settings {
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load from `HELIUS_*` environment variables (and a `.env` file if one
    /// exists) on top of the defaults, then validate.
    pub fn from_env() -> Result<Self> {
        SettingsLoader::new().dotenv().load()
    }

    /// Set one field from its textual form. Unknown keys are ignored so that
    /// a settings file may carry unrelated application keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_key(key).as_str() {
            "api_key" => self.api_key = value.to_string(),
            "base_url" => self.base_url = value.to_string(),
            "api_version" => self.api_version = value.to_string(),
            "timeout_secs" => self.timeout_secs = parse_secs("timeout_secs", value)?,
            "connect_timeout_secs" => {
                self.connect_timeout_secs = parse_secs("connect_timeout_secs", value)?
            }
            "user_agent" => self.user_agent = Some(value.to_string()),
            other => debug!(key = other, "Ignoring unknown settings key"),
        }
        Ok(())
    }

    /// Apply every scalar entry of a parsed settings object.
    pub fn merge_value(&mut self, value: &Value) -> Result<()> {
        let Some(map) = value.as_object() else {
            return Err(ConfigError::ParseError(
                "settings must be an object".to_string(),
            ));
        };

        for (key, value) in map {
            match value {
                Value::String(s) => self.set(key, s)?,
                Value::Number(n) => self.set(key, &n.to_string())?,
                Value::Bool(b) => self.set(key, &b.to_string())?,
                _ => debug!(key = %key, "Ignoring non-scalar settings value"),
            }
        }
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.api_key, "api_key")?;
        ConfigValidator::is_url(&self.base_url, "base_url")?;
        ConfigValidator::not_empty(&self.api_version, "api_version")?;
        ConfigValidator::in_range(self.timeout_secs, 1, 600, "timeout_secs")?;
        ConfigValidator::in_range(self.connect_timeout_secs, 1, 600, "connect_timeout_secs")?;
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    let key = key.trim().to_lowercase().replace('-', "_");
    match key.strip_prefix("helius_") {
        Some(rest) => rest.to_string(),
        None => key,
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{} ({:?})", e, value),
    })
}

/// Treat an absent `.env` as empty; any other failure is reported.
fn ignore_missing(result: dotenvy::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::LoadError(format!("Failed to load .env: {}", e))),
    }
}

/// Layered settings loader.
///
/// Precedence, lowest first: defaults, settings file, `.env` file,
/// process environment.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_prefix: String,
    file: Option<PathBuf>,
    dotenv: Option<Option<PathBuf>>,
    use_env: bool,
    validate: bool,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            env_prefix: crate::env::DEFAULT_ENV_PREFIX.to_string(),
            file: None,
            dotenv: None,
            use_env: true,
            validate: true,
        }
    }

    /// Read a JSON, TOML or `.env` settings file.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Load `.env` from the working directory (if present) into the process
    /// environment before reading variables.
    pub fn dotenv(mut self) -> Self {
        self.dotenv = Some(None);
        self
    }

    /// Load a specific dotenv file; a missing file is an error.
    pub fn dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = Some(Some(path.into()));
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the process environment entirely.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Return settings without running [`Validate`].
    pub fn skip_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.file {
            let loader = ConfigLoader::auto(path)?;
            let value = loader.load_file(path)?;
            debug!(path = %path.display(), format = ?loader.format(), "Loaded settings file");
            settings.merge_value(&value)?;
        }

        match &self.dotenv {
            Some(Some(path)) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            Some(None) => ignore_missing(dotenvy::dotenv().map(|_| ()))?,
            None => {}
        }

        if self.use_env {
            let mut vars: Vec<_> = EnvLoader::new(self.env_prefix.clone())
                .load()
                .into_iter()
                .collect();
            vars.sort();
            for (key, value) in vars {
                settings.set(&key, &value)?;
            }
        }

        if self.validate {
            settings.validate()?;
        }
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
