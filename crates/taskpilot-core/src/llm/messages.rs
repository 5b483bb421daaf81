//! Request and reply shapes exchanged with a capability provider

use crate::tools::ToolInvocation;
use serde::{Deserialize, Serialize};

/// Provider-side role vocabulary. Only two roles exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Model,
}

/// A text part of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One prior conversation turn as the provider sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: HistoryRole,
    pub parts: Vec<Part>,
}

impl HistoryTurn {
    pub fn text(role: HistoryRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::text(HistoryRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::text(HistoryRole::Model, text)
    }
}

/// Everything a provider needs for one turn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderRequest {
    /// The new user message
    pub message: String,
    /// Prior turns, oldest first
    pub history: Vec<HistoryTurn>,
    /// Extra context appended to the system instruction for this call only
    pub task_context: Option<String>,
}

impl ProviderRequest {
    pub fn new(message: impl Into<String>, history: Vec<HistoryTurn>) -> Self {
        Self {
            message: message.into(),
            history,
            task_context: None,
        }
    }

    pub fn with_task_context(mut self, context: impl Into<String>) -> Self {
        self.task_context = Some(context.into());
        self
    }
}

/// Structured provider response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderReply {
    /// Display text, possibly empty
    pub text: String,
    /// Tool invocations in the order the provider issued them
    #[serde(default)]
    pub function_calls: Vec<ToolInvocation>,
}

impl ProviderReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            function_calls: Vec::new(),
        }
    }

    pub fn with_calls(mut self, calls: Vec<ToolInvocation>) -> Self {
        self.function_calls = calls;
        self
    }
}
