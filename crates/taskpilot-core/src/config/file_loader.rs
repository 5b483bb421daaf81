//! File-based configuration loading

use super::api_key::ApiKeySource;
use super::model::Config;
use crate::error::{PilotError, PilotResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension (TOML when
/// there is none). Returns the default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> PilotResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PilotError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let mut config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            PilotError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            PilotError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => toml::from_str(&content).map_err(|e| {
            PilotError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
    };

    if config.provider.has_api_key() {
        config.provider.api_key_source = ApiKeySource::ConfigFile;
    }

    Ok(config)
}
