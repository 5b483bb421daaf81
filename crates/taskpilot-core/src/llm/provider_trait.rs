//! Narrow capability-provider seam used by the session

use super::messages::{ProviderReply, ProviderRequest};
use crate::error::PilotResult;
use async_trait::async_trait;

/// An external oracle turning a user message plus history into display text
/// and tool invocations.
///
/// Implementations are configured up front with their system instruction and
/// tool vocabulary; a call carries only per-turn data. A failed call is
/// reported as an error and never retried by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Run one request/response exchange
    async fn generate(&self, request: &ProviderRequest) -> PilotResult<ProviderReply>;
}
