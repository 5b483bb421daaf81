//! Core error type for TaskPilot

use thiserror::Error;

/// Result type alias for TaskPilot operations
pub type PilotResult<T> = Result<T, PilotError>;

/// Main error type for TaskPilot
#[derive(Error, Debug, Clone)]
pub enum PilotError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Capability provider errors (auth, quota, malformed response)
    #[error("Provider error: {message}")]
    Provider {
        message: String,
        provider: Option<String>,
        status_code: Option<u16>,
    },

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A conversational turn is already in flight
    #[error("A message is already being processed; wait for the reply before sending another")]
    Busy,
}

impl PilotError {
    /// Whether this error came from the capability provider, its transport
    /// included
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// Optional context attached to configuration errors
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            _ => None,
        }
    }
}
