//! In-memory task storage

mod seed;
mod task_store;

pub use seed::demo_tasks;
pub use task_store::TaskStore;
