//! Tool vocabulary advertised to the capability provider and the dispatch of
//! provider-issued invocations onto the task store

pub mod dispatch;
pub mod names;
pub mod task_tool;
pub mod types;
pub mod vocabulary;

pub use dispatch::{DispatchReport, InvocationOutcome, ToolDispatcher, ToolEffect};
pub use task_tool::{AI_GENERATED_CATEGORY, SkipReason, TaskTool};
pub use types::{ToolInvocation, ToolParameter, ToolSchema};
pub use vocabulary::task_tools;
