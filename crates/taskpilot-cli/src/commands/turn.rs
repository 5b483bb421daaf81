//! One conversational turn with terminal feedback

use crate::console::CliConsole;
use crate::render;
use colored::*;
use taskpilot_core::{PilotError, Session, TurnOutcome};

/// Send `text`, show a spinner while the provider works, then print the
/// reply and what the tools did.
///
/// Returns `None` when the message was rejected before a turn started.
pub async fn run_turn(
    session: &Session,
    console: &mut CliConsole,
    text: &str,
) -> Option<TurnOutcome> {
    console.start_spinner("Thinking...");
    let result = session.send_message(text).await;
    console.finish_spinner();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(PilotError::Busy) => {
            console.warn("Still working on the previous message.");
            return None;
        }
        Err(e) => {
            console.warn(&e.to_string());
            return None;
        }
    };

    println!("{} {}", "pilot".magenta().bold(), outcome.reply().content);

    match &outcome {
        TurnOutcome::Completed { report, .. } => {
            for line in render::report(report) {
                println!("  {}", line);
            }
        }
        TurnOutcome::ProviderFailed { error, .. } => {
            console.info(&format!("provider error: {}", error));
        }
    }

    Some(outcome)
}
