//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::console::CliConsole;
use crate::logging;
use anyhow::Context;
use taskpilot_core::{Config, Session, load_config};

/// Load configuration, install logging, then dispatch to the chosen command
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let config = load(&cli)?;
    logging::init(&config.logging, cli.verbose)?;

    let console = CliConsole::new(cli.verbose);

    match cli.command {
        None | Some(Commands::Chat) => {
            let session = build_session(&config, &console)?;
            commands::chat::execute(session, console).await
        }
        Some(Commands::Ask { message }) => {
            let session = build_session(&config, &console)?;
            commands::ask::execute(session, console, &message.join(" ")).await
        }
        Some(Commands::Tools) => {
            commands::tools::show_tools(&console);
            Ok(())
        }
        Some(Commands::Config {
            action: ConfigAction::Show,
        }) => commands::config::show(&console, &config, &cli.config_file),
    }
}

fn load(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = load_config(Some(&cli.config_file)).with_context(|| {
        format!(
            "failed to load configuration from '{}'",
            cli.config_file.display()
        )
    })?;
    if cli.no_demo_tasks {
        config.session.seed_demo_tasks = false;
    }
    Ok(config)
}

fn build_session(config: &Config, console: &CliConsole) -> anyhow::Result<Session> {
    if !config.provider.has_api_key() {
        console.warn(
            "No API key found. Set TASKPILOT_API_KEY or GEMINI_API_KEY; slash commands still work.",
        );
    } else {
        console.info(&format!(
            "Using {} (API key from {})",
            config.provider.model, config.provider.api_key_source
        ));
    }
    Session::from_config(config).context("failed to create session")
}
