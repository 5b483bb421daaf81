//! Configuration inspection

use crate::console::CliConsole;
use anyhow::Context;
use colored::*;
use std::path::Path;
use taskpilot_core::Config;

/// Print the effective configuration with the API key masked
pub fn show(console: &CliConsole, config: &Config, config_file: &Path) -> anyhow::Result<()> {
    console.print_header("Configuration");

    if config_file.exists() {
        console.success(&format!("Loaded configuration from: {}", config_file.display()));
    } else {
        console.warn(&format!(
            "Configuration file not found: {}, using defaults",
            config_file.display()
        ));
    }

    let mut display = config.clone();
    display.provider.api_key = config.provider.masked_api_key();
    let rendered = toml::to_string_pretty(&display).context("failed to render configuration")?;
    println!("{}", rendered);

    console.print_separator();
    if config.provider.has_api_key() {
        println!(
            "API key: {} (from {})",
            "set".green(),
            config.provider.api_key_source
        );
    } else {
        println!(
            "API key: {} (set TASKPILOT_API_KEY or GEMINI_API_KEY)",
            "missing".red()
        );
    }
    Ok(())
}
