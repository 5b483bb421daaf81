//! Chat transcript and the history window handed to the provider

mod history;
mod transcript;

pub use history::history_window;
pub use transcript::Transcript;
