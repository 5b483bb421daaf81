//! Environment variable-based configuration overrides

use super::api_key::{API_KEY_ENV_VARS, ApiKeySource};
use super::model::Config;
use crate::error::{PilotError, PilotResult};
use std::str::FromStr;

/// Apply overrides from the process environment
pub fn apply_env(config: &mut Config) -> PilotResult<()> {
    apply_env_with(config, |name| std::env::var(name).ok())
}

/// Apply overrides using `lookup` to read variables
pub fn apply_env_with<F>(config: &mut Config, lookup: F) -> PilotResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some((name, key)) = API_KEY_ENV_VARS
        .iter()
        .find_map(|&name| get(name).map(|key| (name, key)))
    {
        config.provider.api_key = Some(key);
        config.provider.api_key_source = ApiKeySource::EnvVar(name.to_string());
    }

    if let Some(model) = get("TASKPILOT_MODEL") {
        config.provider.model = model;
    }
    if let Some(base_url) = get("TASKPILOT_BASE_URL") {
        config.provider.base_url = base_url;
    }
    if let Some(timeout) = get("TASKPILOT_TIMEOUT_SECS") {
        config.provider.timeout_secs = Some(parse_var("TASKPILOT_TIMEOUT_SECS", &timeout)?);
    }
    if let Some(temperature) = get("TASKPILOT_TEMPERATURE") {
        config.provider.temperature = Some(parse_var("TASKPILOT_TEMPERATURE", &temperature)?);
    }
    if let Some(window) = get("TASKPILOT_HISTORY_WINDOW") {
        config.session.history_window = parse_var("TASKPILOT_HISTORY_WINDOW", &window)?;
    }
    if let Some(share) = get("TASKPILOT_SHARE_TASK_SNAPSHOT") {
        config.session.share_task_snapshot = parse_var("TASKPILOT_SHARE_TASK_SNAPSHOT", &share)?;
    }
    if let Some(level) = get("TASKPILOT_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = get("TASKPILOT_LOG_FORMAT") {
        config.logging.format = format;
    }

    Ok(())
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> PilotResult<T> {
    value.trim().parse().map_err(|_| {
        PilotError::config_with_context(
            format!("Invalid {} value", name),
            format!("Parsing environment value '{}'", value),
        )
    })
}
