//! CLI argument definitions using clap
//!
//! - taskpilot                  # Interactive chat (default)
//! - taskpilot ask "text"       # One-shot message
//! - taskpilot tools/config     # Utility commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskpilot_core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "taskpilot")]
#[command(about = "TaskPilot - a todo list you can talk to")]
#[command(
    long_about = r#"TaskPilot - a todo list you can talk to

USAGE:
  taskpilot                      # Start interactive chat
  taskpilot ask "your message"   # Send one message and exit

UTILITY COMMANDS:
  taskpilot tools                # List the assistant's tools
  taskpilot config show          # Show effective configuration

The API key is read from TASKPILOT_API_KEY, GEMINI_API_KEY, GOOGLE_API_KEY
or API_KEY (a .env file in the working directory is honoured)."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, JSON or YAML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Start with an empty task list instead of the demo tasks
    #[arg(long, global = true)]
    pub no_demo_tasks: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,

    /// Send a single message and print the reply with the resulting tasks
    Ask {
        /// Message for the assistant
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// List the tools the assistant can call
    Tools,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum ConfigAction {
    /// Display the effective configuration with secrets masked
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_is_chat() {
        let cli = Cli::try_parse_from(["taskpilot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!cli.no_demo_tasks);
    }

    #[test]
    fn test_ask_joins_words() {
        let cli =
            Cli::try_parse_from(["taskpilot", "ask", "buy", "milk", "--no-demo-tasks"]).unwrap();
        match cli.command {
            Some(Commands::Ask { message }) => assert_eq!(message.join(" "), "buy milk"),
            _ => panic!("expected ask"),
        }
        assert!(cli.no_demo_tasks);
    }

    #[test]
    fn test_config_show_with_custom_file() {
        let cli =
            Cli::try_parse_from(["taskpilot", "config", "show", "--config-file", "alt.yaml"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Show
            })
        ));
        assert_eq!(cli.config_file, PathBuf::from("alt.yaml"));
    }
}
