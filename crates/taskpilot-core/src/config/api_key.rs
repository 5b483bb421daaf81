//! API key resolution and masking

/// Environment variables checked for the provider key, highest priority first
pub const API_KEY_ENV_VARS: [&str; 4] =
    ["TASKPILOT_API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

/// Source of the API key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiKeySource {
    /// From configuration file
    ConfigFile,
    /// From the named environment variable
    EnvVar(String),
    /// No API key found
    #[default]
    NotFound,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::ConfigFile => write!(f, "config file"),
            ApiKeySource::EnvVar(name) => write!(f, "{} env", name),
            ApiKeySource::NotFound => write!(f, "not found"),
        }
    }
}

/// Mask an API key for safe display
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..8].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}
