//! Capability provider interface and its Gemini implementation

pub mod converters;
pub mod messages;
pub mod parsers;
pub mod provider_trait;
pub mod providers;

pub use messages::{HistoryRole, HistoryTurn, Part, ProviderReply, ProviderRequest};
pub use provider_trait::CapabilityProvider;
pub use providers::GeminiProvider;

#[cfg(test)]
pub use provider_trait::MockCapabilityProvider;
