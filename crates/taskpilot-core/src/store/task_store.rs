//! Ordered, exclusively-owned task collection

use super::seed::demo_tasks;
use crate::types::{StatusFilter, Task, TaskDraft, TaskPatch, TaskStats, TaskStatus};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

const ID_LEN: usize = 8;

/// In-memory task store.
///
/// New tasks go to the front; updates never reorder. None of the mutations
/// fail: missing draft fields take defaults and unknown ids are no-ops.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo tasks
    pub fn with_demo_tasks() -> Self {
        Self {
            tasks: demo_tasks(),
        }
    }

    /// Build a full task from `draft` and insert it first
    pub fn add(&mut self, draft: TaskDraft) -> &[Task] {
        let task = draft.into_task(self.fresh_id(), Utc::now());
        debug!(task_id = %task.id, title = %task.title, "task added");
        self.tasks.insert(0, task);
        &self.tasks
    }

    /// Merge `patch` into the task with matching id; no-op if absent
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> &[Task] {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                patch.apply_to(task);
                debug!(task_id = %id, "task updated");
            }
            None => debug!(task_id = %id, "update for unknown task ignored"),
        }
        &self.tasks
    }

    /// Remove the task with matching id; no-op if absent
    pub fn delete(&mut self, id: &str) -> &[Task] {
        if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(index);
            debug!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete for unknown task ignored");
        }
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks passing `filter`, in display order
    pub fn filter(&self, filter: StatusFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        TaskStats {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// One line per task, suitable for handing to the provider as context
    pub fn snapshot_text(&self) -> String {
        if self.tasks.is_empty() {
            return "The task list is empty.".to_string();
        }
        self.tasks
            .iter()
            .map(|t| {
                format!(
                    "- id={} | {} | status={} | priority={} | category={}",
                    t.id, t.title, t.status, t.priority, t.category
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fresh_id(&self) -> String {
        loop {
            let id: String = Uuid::new_v4().simple().to_string()[..ID_LEN].to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
