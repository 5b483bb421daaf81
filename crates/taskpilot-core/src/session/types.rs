//! Session type definition

use super::state::TurnState;
use crate::config::SessionConfig;
use crate::conversation::Transcript;
use crate::llm::CapabilityProvider;
use crate::store::TaskStore;
use parking_lot::Mutex;
use std::sync::Arc;

/// Top-level session state.
///
/// Methods take `&self` so a session can be shared behind an `Arc` by a
/// presentation layer. Locks are short and never held across the provider
/// call; only one conversational turn may be in flight at a time.
pub struct Session {
    pub(super) store: Mutex<TaskStore>,
    pub(super) transcript: Mutex<Transcript>,
    pub(super) provider: Arc<dyn CapabilityProvider>,
    pub(super) config: SessionConfig,
    pub(super) state: Mutex<TurnState>,
}
