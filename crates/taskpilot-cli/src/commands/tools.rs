//! Tools command implementation

use crate::console::CliConsole;
use crate::render;
use taskpilot_core::tools::task_tools;

/// Show the tools advertised to the provider
pub fn show_tools(console: &CliConsole) {
    console.print_header("Available Tools");

    let tools = task_tools();
    for schema in &tools {
        println!("{}", render::tool(schema));
        println!();
    }

    println!("Total tools available: {}", tools.len());
}
