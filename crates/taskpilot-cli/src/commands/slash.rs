//! Slash command parsing for the chat loop
//!
//! Lines starting with `/` never reach the assistant. They operate on the
//! session directly.

use taskpilot_core::{Priority, StatusFilter, TaskDraft, TaskId};

/// A parsed local command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Tasks(StatusFilter),
    Add(TaskDraft),
    Done(TaskId),
    Reopen(TaskId),
    SetDue(TaskId, String),
    SetPriority(TaskId, Priority),
    Delete(TaskId),
    History,
    Clear,
    Stats,
    Help,
    Exit,
}

/// Usage lines shown by `/help`
pub const HELP: &[(&str, &str)] = &[
    ("/tasks [all|pending|completed]", "Show tasks"),
    (
        "/add <title> [--priority P] [--category C] [--description D] [--due DATE]",
        "Add a task directly",
    ),
    ("/done <id>", "Mark a task completed"),
    ("/reopen <id>", "Mark a completed task pending again"),
    ("/due <id> <date>", "Set a task's due date"),
    ("/priority <id> <low|medium|high>", "Change a task's priority"),
    ("/delete <id>", "Delete a task"),
    ("/history", "Show the conversation"),
    ("/clear", "Clear the conversation (tasks are kept)"),
    ("/stats", "Show task counts"),
    ("/help", "Show this help"),
    ("/exit", "Quit"),
];

/// Parse a line of input.
///
/// `Ok(None)` means the line is not a slash command and should be sent to
/// the assistant. `Err` carries a usage message for the user.
pub fn parse(input: &str) -> Result<Option<SlashCommand>, String> {
    let input = input.trim();
    let Some(body) = input.strip_prefix('/') else {
        return Ok(None);
    };

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "tasks" | "ls" => SlashCommand::Tasks(parse_filter(rest)?),
        "add" => SlashCommand::Add(parse_add(rest)?),
        "done" | "complete" => SlashCommand::Done(single_id(rest, "/done <id>")?),
        "reopen" | "undo" => SlashCommand::Reopen(single_id(rest, "/reopen <id>")?),
        "due" => {
            let usage = "usage: /due <id> <date>";
            let Some((id, date)) = rest.split_once(char::is_whitespace) else {
                return Err(usage.to_string());
            };
            let date = date.trim();
            if date.is_empty() {
                return Err(usage.to_string());
            }
            SlashCommand::SetDue(id.to_string(), date.to_string())
        }
        "priority" => {
            let mut words = rest.split_whitespace();
            let usage = "usage: /priority <id> <low|medium|high>";
            let (Some(id), Some(level), None) = (words.next(), words.next(), words.next()) else {
                return Err(usage.to_string());
            };
            let priority = level.parse::<Priority>().map_err(|e| format!("{e}; {usage}"))?;
            SlashCommand::SetPriority(id.to_string(), priority)
        }
        "delete" | "rm" => SlashCommand::Delete(single_id(rest, "/delete <id>")?),
        "history" => SlashCommand::History,
        "clear" => SlashCommand::Clear,
        "stats" => SlashCommand::Stats,
        "help" | "?" => SlashCommand::Help,
        "exit" | "quit" | "q" => SlashCommand::Exit,
        other => return Err(format!("unknown command '/{other}', try /help")),
    };
    Ok(Some(command))
}

fn parse_filter(rest: &str) -> Result<StatusFilter, String> {
    if rest.is_empty() {
        return Ok(StatusFilter::All);
    }
    rest.parse::<StatusFilter>()
        .map_err(|_| "usage: /tasks [all|pending|completed]".to_string())
}

fn single_id(rest: &str, usage: &str) -> Result<TaskId, String> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(id), None) => Ok(id.to_string()),
        _ => Err(format!("usage: {usage}")),
    }
}

#[derive(Clone, Copy)]
enum AddField {
    Title,
    Priority,
    Category,
    Description,
    Due,
}

fn parse_add(rest: &str) -> Result<TaskDraft, String> {
    const USAGE: &str =
        "usage: /add <title> [--priority P] [--category C] [--description D] [--due DATE]";

    let mut field = AddField::Title;
    let mut title = Vec::new();
    let mut priority = Vec::new();
    let mut category = Vec::new();
    let mut description = Vec::new();
    let mut due = Vec::new();

    for word in rest.split_whitespace() {
        match word {
            "--priority" | "-p" => field = AddField::Priority,
            "--category" | "-c" => field = AddField::Category,
            "--description" | "-d" => field = AddField::Description,
            "--due" => field = AddField::Due,
            _ => match field {
                AddField::Title => title.push(word),
                AddField::Priority => priority.push(word),
                AddField::Category => category.push(word),
                AddField::Description => description.push(word),
                AddField::Due => due.push(word),
            },
        }
    }

    if title.is_empty() {
        return Err(USAGE.to_string());
    }

    let mut draft = TaskDraft::titled(title.join(" "));
    if !priority.is_empty() {
        let level = priority.join(" ");
        draft = draft.with_priority(level.parse().map_err(|e| format!("{e}; {USAGE}"))?);
    }
    if !category.is_empty() {
        draft = draft.with_category(category.join(" "));
    }
    if !description.is_empty() {
        draft = draft.with_description(description.join(" "));
    }
    if !due.is_empty() {
        draft = draft.with_due_date(due.join(" "));
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskpilot_core::TaskStatus;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("remind me to buy milk"), Ok(None));
        assert_eq!(parse("  "), Ok(None));
    }

    #[test]
    fn test_tasks_filter() {
        assert_eq!(parse("/tasks"), Ok(Some(SlashCommand::Tasks(StatusFilter::All))));
        assert_eq!(
            parse("/tasks pending"),
            Ok(Some(SlashCommand::Tasks(StatusFilter::Only(TaskStatus::Pending))))
        );
        assert!(parse("/tasks archived").is_err());
    }

    #[test]
    fn test_add_with_flags() {
        let parsed = parse("/add Buy oat milk --priority high --category Errands --description two liters")
            .unwrap()
            .unwrap();
        let expected = TaskDraft::titled("Buy oat milk")
            .with_priority(Priority::High)
            .with_category("Errands")
            .with_description("two liters");
        assert_eq!(parsed, SlashCommand::Add(expected));
    }

    #[test]
    fn test_add_with_due_date() {
        let parsed = parse("/add File taxes --due 2026-04-15 --priority high").unwrap().unwrap();
        let expected = TaskDraft::titled("File taxes")
            .with_due_date("2026-04-15")
            .with_priority(Priority::High);
        assert_eq!(parsed, SlashCommand::Add(expected));
    }

    #[test]
    fn test_add_title_only() {
        assert_eq!(
            parse("/add Call mom"),
            Ok(Some(SlashCommand::Add(TaskDraft::titled("Call mom"))))
        );
    }

    #[test]
    fn test_add_rejects_missing_title_and_bad_priority() {
        assert!(parse("/add").is_err());
        assert!(parse("/add --priority high").is_err());
        assert!(parse("/add Taxes --priority urgent").is_err());
    }

    #[test]
    fn test_id_commands() {
        assert_eq!(parse("/done 2"), Ok(Some(SlashCommand::Done("2".to_string()))));
        assert_eq!(parse("/delete ab12"), Ok(Some(SlashCommand::Delete("ab12".to_string()))));
        assert_eq!(
            parse("/priority 3 low"),
            Ok(Some(SlashCommand::SetPriority("3".to_string(), Priority::Low)))
        );
        assert_eq!(parse("/reopen 1"), Ok(Some(SlashCommand::Reopen("1".to_string()))));
        assert_eq!(parse("/undo 1"), Ok(Some(SlashCommand::Reopen("1".to_string()))));
        assert_eq!(
            parse("/due 2 next friday"),
            Ok(Some(SlashCommand::SetDue("2".to_string(), "next friday".to_string())))
        );
        assert!(parse("/due 2").is_err());
        assert!(parse("/reopen").is_err());
        assert!(parse("/done").is_err());
        assert!(parse("/done 1 2").is_err());
        assert!(parse("/priority 3").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("/snooze 3").unwrap_err();
        assert!(err.contains("/snooze"));
    }

    #[test]
    fn test_simple_commands_are_case_insensitive() {
        assert_eq!(parse("/EXIT"), Ok(Some(SlashCommand::Exit)));
        assert_eq!(parse("/History"), Ok(Some(SlashCommand::History)));
    }
}
