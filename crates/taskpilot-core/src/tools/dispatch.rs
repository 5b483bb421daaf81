//! Applies provider-issued invocations to the task store

use super::task_tool::{SkipReason, TaskTool};
use super::types::ToolInvocation;
use crate::store::TaskStore;
use crate::types::{StatusFilter, TaskId, TaskPatch, TaskStatus};
use tracing::{debug, info};

/// What one invocation did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEffect {
    Added(TaskId),
    /// `found` is false when the id matched nothing and the update was a no-op
    Completed { task_id: TaskId, found: bool },
    Deleted { task_id: TaskId, found: bool },
    /// `list_tasks` is informational; the provider answers it in its reply text
    Listed(StatusFilter),
    Ignored(SkipReason),
}

impl ToolEffect {
    /// Whether the store changed
    pub fn mutated(&self) -> bool {
        match self {
            Self::Added(_) => true,
            Self::Completed { found, .. } | Self::Deleted { found, .. } => *found,
            Self::Listed(_) | Self::Ignored(_) => false,
        }
    }
}

/// Per-invocation result, in the order the invocations were received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    pub name: String,
    pub effect: ToolEffect,
}

/// Result of applying a batch of invocations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcomes: Vec<InvocationOutcome>,
}

impl DispatchReport {
    /// Number of invocations that changed the store
    pub fn mutation_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.effect.mutated()).count()
    }

    /// Ids of tasks created during this dispatch
    pub fn added_ids(&self) -> Vec<&TaskId> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.effect {
                ToolEffect::Added(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Stateless interpreter of the task vocabulary
pub struct ToolDispatcher;

impl ToolDispatcher {
    /// Apply each invocation in order. Later invocations see the effects of
    /// earlier ones, so `complete_task` then `delete_task` on the same id
    /// leaves the task absent.
    pub fn apply(store: &mut TaskStore, calls: &[ToolInvocation]) -> DispatchReport {
        let outcomes = calls
            .iter()
            .map(|call| InvocationOutcome {
                name: call.name.clone(),
                effect: Self::apply_one(store, call),
            })
            .collect();
        DispatchReport { outcomes }
    }

    fn apply_one(store: &mut TaskStore, call: &ToolInvocation) -> ToolEffect {
        let tool = match TaskTool::parse(call) {
            Ok(tool) => tool,
            Err(reason) => {
                debug!(tool = %call.name, reason = %reason, "skipping tool invocation");
                return ToolEffect::Ignored(reason);
            }
        };

        match tool {
            TaskTool::AddTask(draft) => {
                let id = store
                    .add(draft)
                    .first()
                    .map(|task| task.id.clone())
                    .unwrap_or_default();
                info!(task_id = %id, "assistant added task");
                ToolEffect::Added(id)
            }
            TaskTool::ListTasks(filter) => ToolEffect::Listed(filter),
            TaskTool::CompleteTask(task_id) => {
                let found = store.contains(&task_id);
                store.update(&task_id, TaskPatch::status(TaskStatus::Completed));
                info!(task_id = %task_id, found, "assistant completed task");
                ToolEffect::Completed { task_id, found }
            }
            TaskTool::DeleteTask(task_id) => {
                let found = store.contains(&task_id);
                store.delete(&task_id);
                info!(task_id = %task_id, found, "assistant deleted task");
                ToolEffect::Deleted { task_id, found }
            }
        }
    }
}
