//! TaskPilot CLI application
//!
//! A terminal front-end for the TaskPilot todo assistant.
//!
//! # Modes
//!
//! ## Chat (default)
//! A read-eval-print loop. Plain lines go to the assistant, which may add,
//! complete or delete tasks through its tool vocabulary. Lines starting with
//! `/` are local commands (`/tasks`, `/add`, `/done`, `/help`, ...).
//!
//! - **Command:** `taskpilot` or `taskpilot chat`
//!
//! ## Ask (one-shot)
//! Send a single message, print the reply and the resulting task list.
//!
//! - **Command:** `taskpilot ask "remind me to buy milk"`
//!
//! ## Utility commands
//! `taskpilot tools` and `taskpilot config show`.

mod args;
mod commands;
mod console;
mod logging;
mod render;
mod router;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
