// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Prefix used for settings variables, e.g. `HELIUS_API_KEY`.
pub const DEFAULT_ENV_PREFIX: &str = "HELIUS";

/// Reads prefixed environment variables into lowercase setting keys.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Collect every `{PREFIX}_*` variable, keyed by the lowercased suffix.
    ///
    /// `HELIUS_API_KEY=abc` becomes `api_key = "abc"`. Variables whose value
    /// is not valid unicode are skipped.
    pub fn load(&self) -> HashMap<String, String> {
        let marker = format!("{}_", self.prefix);

        env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter_map(|(key, value)| {
                key.strip_prefix(&marker)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_lowercase(), value))
            })
            .collect()
    }

    /// Load a single variable, e.g. `load_var("api_key")` reads `HELIUS_API_KEY`.
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = format!("{}_{}", self.prefix, key.to_uppercase());
        env::var(&full_key).map_err(ConfigError::EnvError)
    }

    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}
