//! Session: the application object owning all conversational state
//!
//! A [`Session`] holds the task store, the transcript, the provider handle and
//! the turn state. Every UI-facing operation goes through it. The split
//! mirrors its responsibilities:
//!
//! - `constructor`: building sessions from parts or from configuration
//! - `tasks`: direct task operations and read accessors
//! - `chat`: the conversational turn and transcript reset
//! - `state`: the per-turn state machine and its busy guard

mod chat;
mod constructor;
mod outcome;
mod state;
mod tasks;
#[cfg(test)]
mod tests;
mod types;

pub use outcome::TurnOutcome;
pub use state::TurnState;
pub use types::Session;
