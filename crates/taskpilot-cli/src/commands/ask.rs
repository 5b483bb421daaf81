//! One-shot `ask` command

use super::turn::run_turn;
use crate::console::CliConsole;
use crate::render;
use anyhow::bail;
use taskpilot_core::{Session, TurnOutcome};

/// Send a single message and print the resulting task list
pub async fn execute(session: Session, mut console: CliConsole, message: &str) -> anyhow::Result<()> {
    let Some(outcome) = run_turn(&session, &mut console, message).await else {
        bail!("message was not sent");
    };

    console.print_header("Tasks");
    println!("{}", render::task_list(&session.tasks()));
    println!("{}", render::stats(&session.stats()));

    if let TurnOutcome::ProviderFailed { error, .. } = outcome {
        bail!("provider call failed: {}", error);
    }
    Ok(())
}
