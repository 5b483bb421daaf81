//! Typed view over provider invocations
//!
//! Invocations arrive as a free-form name plus argument map. Parsing them into
//! a closed enum keeps the store operations exhaustive; anything outside the
//! vocabulary lands in the `Err` branch and is skipped.

use super::names;
use super::types::ToolInvocation;
use crate::types::{Priority, StatusFilter, TaskDraft, TaskId};
use std::fmt;

/// Category given to tasks the assistant creates without one
pub const AI_GENERATED_CATEGORY: &str = "AI Generated";

/// A recognised invocation from the task vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskTool {
    AddTask(TaskDraft),
    ListTasks(StatusFilter),
    CompleteTask(TaskId),
    DeleteTask(TaskId),
}

/// Why an invocation was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Name outside the vocabulary
    UnknownTool(String),
    /// A required argument was absent or blank
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool '{}'", name),
            Self::MissingArgument { tool, argument } => {
                write!(f, "{} called without '{}'", tool, argument)
            }
        }
    }
}

impl TaskTool {
    /// Interpret a raw invocation
    pub fn parse(call: &ToolInvocation) -> Result<Self, SkipReason> {
        match call.name.as_str() {
            names::ADD_TASK => Ok(Self::AddTask(add_task_draft(call))),
            names::LIST_TASKS => Ok(Self::ListTasks(
                call.get_string("status")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
            )),
            names::COMPLETE_TASK => {
                required_id(call, names::COMPLETE_TASK).map(Self::CompleteTask)
            }
            names::DELETE_TASK => required_id(call, names::DELETE_TASK).map(Self::DeleteTask),
            other => Err(SkipReason::UnknownTool(other.to_string())),
        }
    }
}

fn add_task_draft(call: &ToolInvocation) -> TaskDraft {
    TaskDraft {
        title: call.get_non_blank("title"),
        description: Some(call.get_string("description").unwrap_or_default()),
        priority: Some(
            call.get_string("priority")
                .map(|p| Priority::parse_or_default(&p))
                .unwrap_or_default(),
        ),
        status: None,
        category: Some(
            call.get_non_blank("category")
                .unwrap_or_else(|| AI_GENERATED_CATEGORY.to_string()),
        ),
        due_date: None,
    }
}

fn required_id(call: &ToolInvocation, tool: &'static str) -> Result<TaskId, SkipReason> {
    call.get_non_blank("task_id")
        .map(|id| id.trim().to_string())
        .ok_or(SkipReason::MissingArgument {
            tool,
            argument: "task_id",
        })
}
