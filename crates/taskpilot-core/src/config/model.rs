//! Configuration data model

use super::api_key::{ApiKeySource, mask_api_key};
use crate::error::{PilotError, PilotResult};
use crate::prompts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Gemini API root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Upper bound accepted for `session.history_window`
const MAX_HISTORY_WINDOW: usize = 100;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values that cannot be expressed by the types alone
    pub fn validate(&self) -> PilotResult<()> {
        if self.provider.model.trim().is_empty() {
            return Err(PilotError::config("provider.model must not be empty"));
        }
        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(PilotError::config_with_context(
                format!("Invalid provider.base_url '{}'", self.provider.base_url),
                "base_url must start with http:// or https://",
            ));
        }
        if self.session.history_window > MAX_HISTORY_WINDOW {
            return Err(PilotError::config(format!(
                "session.history_window must be at most {}",
                MAX_HISTORY_WINDOW
            )));
        }
        Ok(())
    }
}

/// Capability provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub model: String,
    pub base_url: String,
    /// API key; normally supplied through the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Where the API key came from
    #[serde(skip)]
    pub api_key_source: ApiKeySource,
    /// HTTP timeout applied by the provider client, in seconds
    pub timeout_secs: Option<u64>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_source: ApiKeySource::NotFound,
            timeout_secs: Some(60),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl ProviderConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Display-safe API key
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_api_key)
    }
}

/// Conversation and session behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of prior transcript messages sent as history
    pub history_window: usize,
    /// Append the current task list to the system instruction on every call
    pub share_task_snapshot: bool,
    /// Start with the demo tasks
    pub seed_demo_tasks: bool,
    /// First message of every transcript
    pub greeting: String,
    /// Replaces the built-in system instruction when set
    pub system_instruction: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_window: 10,
            share_task_snapshot: false,
            seed_demo_tasks: true,
            greeting: prompts::GREETING.to_string(),
            system_instruction: None,
        }
    }
}

impl SessionConfig {
    /// The system instruction in effect
    pub fn effective_system_instruction(&self) -> &str {
        self.system_instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(prompts::SYSTEM_INSTRUCTION)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, compact, json)
    pub format: String,
    /// Optional log file; logs go to stderr when unset
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            log_file: None,
        }
    }
}
