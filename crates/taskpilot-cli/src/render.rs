//! Text rendering for tasks, transcripts and dispatch reports

use chrono::{DateTime, Local, Utc};
use colored::*;
use taskpilot_core::tools::ToolSchema;
use taskpilot_core::{
    ChatMessage, ChatRole, DispatchReport, Priority, Task, TaskStats, TaskStatus, ToolEffect,
};

/// One task as a single line
pub fn task_line(task: &Task) -> String {
    let check = match task.status {
        TaskStatus::Completed => "[x]".green(),
        TaskStatus::Pending => "[ ]".normal(),
    };
    let title = match task.status {
        TaskStatus::Completed => task.title.dimmed().strikethrough(),
        TaskStatus::Pending => task.title.bold(),
    };
    let priority = match task.priority {
        Priority::High => "High".red(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".blue(),
    };

    let mut line = format!(
        "{} {} {}  {} · {}",
        check,
        format!("#{}", task.id).dimmed(),
        title,
        priority,
        task.category.cyan()
    );
    if let Some(due) = &task.due_date {
        line.push_str(&format!(" · due {}", due));
    }
    line
}

/// Task list with descriptions indented under each title
pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks.".dimmed().to_string();
    }
    let mut out = Vec::with_capacity(tasks.len());
    for task in tasks {
        out.push(task_line(task));
        if !task.description.trim().is_empty() {
            out.push(format!("      {}", task.description.dimmed()));
        }
    }
    out.join("\n")
}

pub fn stats(stats: &TaskStats) -> String {
    format!(
        "{} total · {} pending · {} completed",
        stats.total.to_string().bold(),
        stats.pending.to_string().yellow(),
        stats.completed.to_string().green()
    )
}

/// A transcript message with role label and time
pub fn message(message: &ChatMessage) -> String {
    let label = match message.role {
        ChatRole::User => "you".cyan().bold(),
        ChatRole::Assistant => "pilot".magenta().bold(),
        ChatRole::System => "system".dimmed(),
    };
    let mut out = format!(
        "{} {} {}",
        clock_time(message.timestamp).dimmed(),
        label,
        message.content
    );
    if let Some(calls) = &message.tool_calls {
        for call in calls {
            out.push_str(&format!("\n      {} {}", "↳".dimmed(), call.summary().dimmed()));
        }
    }
    out
}

/// `HH:MM` in the user's local timezone
pub fn clock_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Human-readable effects of one dispatch, one line per invocation
pub fn report(report: &DispatchReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.effect {
            ToolEffect::Added(id) => format!("{} added task #{}", "+".green().bold(), id),
            ToolEffect::Completed { task_id, found: true } => {
                format!("{} completed task #{}", "✓".green().bold(), task_id)
            }
            ToolEffect::Deleted { task_id, found: true } => {
                format!("{} deleted task #{}", "-".red().bold(), task_id)
            }
            ToolEffect::Completed { task_id, found: false }
            | ToolEffect::Deleted { task_id, found: false } => format!(
                "{} {}: no task #{}",
                "·".dimmed(),
                outcome.name,
                task_id
            ),
            ToolEffect::Listed(filter) => format!("{} listed {} tasks", "·".dimmed(), filter),
            ToolEffect::Ignored(reason) => format!("{} ignored: {}", "·".dimmed(), reason),
        })
        .collect()
}

/// Tool declaration with its parameters
pub fn tool(schema: &ToolSchema) -> String {
    let required = schema.required();

    let mut out = format!("{}  {}", schema.name.magenta().bold(), schema.description);
    if let Some(properties) = schema.parameters.get("properties").and_then(|p| p.as_object()) {
        for (name, property) in properties {
            let description = property
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or_default();
            let marker = if required.contains(&name.as_str()) {
                "required".yellow()
            } else {
                "optional".dimmed()
            };
            out.push_str(&format!("\n    {} ({}) {}", name.bold(), marker, description));
        }
    }
    out
}
