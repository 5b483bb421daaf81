//! Configuration management
//!
//! Layers, lowest to highest precedence: built-in defaults, a config file
//! (TOML, JSON or YAML by extension), then environment variables (a `.env`
//! file in the working directory is honoured).

mod api_key;
mod env_loader;
mod file_loader;
mod loader;
mod model;

pub use api_key::{API_KEY_ENV_VARS, ApiKeySource, mask_api_key};
pub use env_loader::{apply_env, apply_env_with};
pub use file_loader::load_from_file;
pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use model::{Config, LoggingConfig, ProviderConfig, SessionConfig};
