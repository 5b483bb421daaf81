//! Tool name constants
//!
//! Canonical names of the fixed task vocabulary. All tool name checks should
//! use these constants.

/// Create a new task
pub const ADD_TASK: &str = "add_task";
/// Report current tasks (informational, no mutation)
pub const LIST_TASKS: &str = "list_tasks";
/// Mark a task as completed
pub const COMPLETE_TASK: &str = "complete_task";
/// Remove a task
pub const DELETE_TASK: &str = "delete_task";
