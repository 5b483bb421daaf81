//! Error types for TaskPilot
//!
//! A single error enum covers the whole core library. Most failure classes in
//! the task domain are resolved without an error at all (defaults, silent
//! no-ops); what remains here is configuration, provider transport and the
//! session-level rejections surfaced to the presentation layer.

mod constructors;
mod types;

pub use types::{PilotError, PilotResult};
