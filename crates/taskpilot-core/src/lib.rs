//! TaskPilot Core Library
//!
//! This crate provides the core of TaskPilot: the in-memory task store,
//! the tool vocabulary and dispatcher that turn provider function calls into
//! store mutations, the Gemini capability provider, configuration loading,
//! and the conversational session that ties them together.

pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod store;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, ProviderConfig, SessionConfig, load_config};
pub use error::{PilotError, PilotResult};
pub use llm::{CapabilityProvider, GeminiProvider, ProviderReply, ProviderRequest};
pub use session::{Session, TurnOutcome, TurnState};
pub use store::TaskStore;
pub use tools::{DispatchReport, ToolDispatcher, ToolEffect, ToolInvocation};
pub use types::*;
