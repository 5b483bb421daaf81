//! Interactive chat loop

use super::slash::{self, HELP, SlashCommand};
use super::turn::run_turn;
use crate::console::CliConsole;
use crate::render;
use colored::*;
use taskpilot_core::{Session, TaskPatch, TaskStatus};
use tracing::debug;

enum Flow {
    Continue,
    Exit,
}

/// Run the chat loop until `/exit` or end of input
pub async fn execute(session: Session, mut console: CliConsole) -> anyhow::Result<()> {
    console.print_header("TaskPilot");
    println!("{}", "Type /help for commands, /exit to quit.".dimmed());
    println!();

    if !session.tasks().is_empty() {
        println!("{}", render::task_list(&session.tasks()));
        println!();
    }
    for message in session.messages() {
        println!("{}", render::message(&message));
    }

    loop {
        let Some(line) = console.read_input("you")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match slash::parse(line) {
            Ok(Some(command)) => {
                debug!(?command, "slash command");
                if let Flow::Exit = apply(&session, &console, command) {
                    break;
                }
            }
            Ok(None) => {
                run_turn(&session, &mut console, line).await;
            }
            Err(usage) => console.warn(&usage),
        }
    }

    console.success("Bye!");
    Ok(())
}

fn apply(session: &Session, console: &CliConsole, command: SlashCommand) -> Flow {
    match command {
        SlashCommand::Tasks(filter) => {
            println!("{}", render::task_list(&session.filtered_tasks(filter)));
        }
        SlashCommand::Add(draft) => {
            let tasks = session.add_task(draft);
            if let Some(task) = tasks.first() {
                console.success(&format!("Added #{} {}", task.id, task.title));
            }
        }
        SlashCommand::Done(id) => {
            if require_task(session, console, &id) {
                session.update_task(&id, TaskPatch::status(TaskStatus::Completed));
                console.success(&format!("Completed #{}", id));
            }
        }
        SlashCommand::Reopen(id) => {
            if require_task(session, console, &id) {
                session.update_task(&id, TaskPatch::status(TaskStatus::Pending));
                console.success(&format!("Reopened #{}", id));
            }
        }
        SlashCommand::SetDue(id, date) => {
            if require_task(session, console, &id) {
                session.update_task(&id, TaskPatch::due_date(date.as_str()));
                console.success(&format!("#{} is due {}", id, date));
            }
        }
        SlashCommand::SetPriority(id, priority) => {
            if require_task(session, console, &id) {
                session.update_task(&id, TaskPatch::priority(priority));
                console.success(&format!("#{} is now {}", id, priority));
            }
        }
        SlashCommand::Delete(id) => {
            if require_task(session, console, &id) {
                session.delete_task(&id);
                console.success(&format!("Deleted #{}", id));
            }
        }
        SlashCommand::History => {
            for message in session.messages() {
                println!("{}", render::message(&message));
            }
        }
        SlashCommand::Clear => {
            session.clear_conversation();
            console.clear_screen();
            console.success("Conversation cleared.");
            for message in session.messages() {
                println!("{}", render::message(&message));
            }
        }
        SlashCommand::Stats => println!("{}", render::stats(&session.stats())),
        SlashCommand::Help => {
            console.print_header("Commands");
            for (usage, description) in HELP {
                println!("  {:<76} {}", usage.cyan(), description);
            }
            println!("  Anything else is sent to the assistant.");
        }
        SlashCommand::Exit => return Flow::Exit,
    }
    Flow::Continue
}

/// Store operations ignore unknown ids; tell the user instead
fn require_task(session: &Session, console: &CliConsole, id: &str) -> bool {
    if session.task(id).is_some() {
        return true;
    }
    console.warn(&format!("No task #{}", id));
    false
}
