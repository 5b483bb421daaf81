//! Session construction

use super::state::TurnState;
use super::types::Session;
use crate::config::{Config, SessionConfig};
use crate::conversation::Transcript;
use crate::error::PilotResult;
use crate::llm::{CapabilityProvider, GeminiProvider};
use crate::store::TaskStore;
use crate::tools::task_tools;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

impl Session {
    /// Create a session around `provider`, seeding demo tasks if configured
    pub fn new(provider: Arc<dyn CapabilityProvider>, config: SessionConfig) -> Self {
        let store = if config.seed_demo_tasks {
            TaskStore::with_demo_tasks()
        } else {
            TaskStore::new()
        };
        Self::with_store(provider, config, store)
    }

    /// Create a session with an explicit starting store
    pub fn with_store(
        provider: Arc<dyn CapabilityProvider>,
        config: SessionConfig,
        store: TaskStore,
    ) -> Self {
        let transcript = Transcript::new(config.greeting.clone());
        Self {
            store: Mutex::new(store),
            transcript: Mutex::new(transcript),
            provider,
            config,
            state: Mutex::new(TurnState::Idle),
        }
    }

    /// Create a session backed by the Gemini provider described in `config`
    pub fn from_config(config: &Config) -> PilotResult<Self> {
        let provider = GeminiProvider::new(
            config.provider.clone(),
            config.session.effective_system_instruction(),
            task_tools(),
        )?;

        info!(
            model = %config.provider.model,
            api_key = config.provider.has_api_key(),
            share_task_snapshot = config.session.share_task_snapshot,
            "session created"
        );

        Ok(Self::new(Arc::new(provider), config.session.clone()))
    }
}
