//! Common types used throughout TaskPilot

pub mod message;
pub mod task;

pub use message::{ChatMessage, ChatRole};
pub use task::{Priority, StatusFilter, Task, TaskDraft, TaskId, TaskPatch, TaskStats, TaskStatus};
