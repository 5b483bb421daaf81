//! Configuration loading entry point

use super::env_loader::apply_env;
use super::file_loader::load_from_file;
use super::model::Config;
use crate::error::PilotResult;
use std::path::Path;
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "taskpilot.toml";

/// Load configuration: defaults, then `path` (if it exists), then environment.
///
/// Reads a `.env` file from the working directory first if one is present.
/// Runs once at startup; credentials are not re-read afterwards.
pub fn load_config(path: Option<&Path>) -> PilotResult<Config> {
    if let Ok(env_file) = dotenv::dotenv() {
        debug!(path = %env_file.display(), "loaded .env file");
    }

    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => Config::default(),
    };
    apply_env(&mut config)?;
    config.validate()?;

    debug!(
        model = %config.provider.model,
        api_key_source = %config.provider.api_key_source,
        "configuration loaded"
    );
    Ok(config)
}
