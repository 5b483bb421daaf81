//! Direct task operations and read accessors

use super::state::TurnState;
use super::types::Session;
use crate::config::SessionConfig;
use crate::types::{ChatMessage, StatusFilter, Task, TaskDraft, TaskPatch, TaskStats};

impl Session {
    /// Add a task; returns the updated collection
    pub fn add_task(&self, draft: TaskDraft) -> Vec<Task> {
        self.store.lock().add(draft).to_vec()
    }

    /// Merge `patch` into a task; no-op for an unknown id
    pub fn update_task(&self, id: &str, patch: TaskPatch) -> Vec<Task> {
        self.store.lock().update(id, patch).to_vec()
    }

    /// Remove a task; no-op for an unknown id
    pub fn delete_task(&self, id: &str) -> Vec<Task> {
        self.store.lock().delete(id).to_vec()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.lock().tasks().to_vec()
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.store.lock().get(id).cloned()
    }

    pub fn filtered_tasks(&self, filter: StatusFilter) -> Vec<Task> {
        self.store
            .lock()
            .filter(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> TaskStats {
        self.store.lock().stats()
    }

    /// Transcript messages, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().messages().to_vec()
    }

    pub fn state(&self) -> TurnState {
        *self.state.lock()
    }

    /// Whether a conversational turn is in flight
    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
