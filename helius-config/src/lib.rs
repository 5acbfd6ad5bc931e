// Settings management for Helius API clients
//
// Settings are layered from defaults, an optional JSON/TOML/.env file, an
// optional dotenv file, and `HELIUS_*` environment variables.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{DEFAULT_ENV_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, Settings, SettingsLoader};
pub use validation::{ConfigValidator, Validate};
