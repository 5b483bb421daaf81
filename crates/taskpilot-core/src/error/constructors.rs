//! Constructor methods for PilotError

use super::types::PilotError;

impl PilotError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            provider: None,
            status_code: None,
        }
    }

    /// Create a provider error tagged with the provider name
    pub fn provider_named(message: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            provider: Some(provider.into()),
            status_code: None,
        }
    }

    /// Create a provider error for a non-success HTTP status
    pub fn provider_status(
        message: impl Into<String>,
        provider: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            provider: Some(provider.into()),
            status_code: Some(status_code),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_context() {
        let err = PilotError::config_with_context("bad value", "reading taskpilot.toml");
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert_eq!(err.context(), Some("reading taskpilot.toml"));
    }

    #[test]
    fn test_provider_failure_classification() {
        assert!(PilotError::provider("quota").is_provider_failure());
        assert!(PilotError::provider_status("denied", "google", 403).is_provider_failure());
        assert!(!PilotError::config("bad").is_provider_failure());
        assert!(!PilotError::Busy.is_provider_failure());
        assert!(!PilotError::invalid_input("empty").is_provider_failure());
    }
}
