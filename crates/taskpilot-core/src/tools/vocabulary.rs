//! The fixed task vocabulary declared to the capability provider

use super::names;
use super::types::{ToolParameter, ToolSchema};

/// Declarations for every tool in the vocabulary, in advertisement order
pub fn task_tools() -> Vec<ToolSchema> {
    vec![
        ToolSchema::new(
            names::ADD_TASK,
            "Create a new todo task.",
            vec![
                ToolParameter::string("title", "The title of the task."),
                ToolParameter::optional_string("description", "Detailed description of the task."),
                ToolParameter::optional_string("priority", "Priority level: Low, Medium, or High."),
                ToolParameter::optional_string("category", "Category or tag for the task."),
            ],
        ),
        ToolSchema::new(
            names::LIST_TASKS,
            "Retrieve the current list of tasks.",
            vec![ToolParameter::optional_string(
                "status",
                "Filter by status: Pending, Completed, or All.",
            )],
        ),
        ToolSchema::new(
            names::COMPLETE_TASK,
            "Mark a specific task as completed.",
            vec![ToolParameter::string(
                "task_id",
                "The unique ID of the task to complete.",
            )],
        ),
        ToolSchema::new(
            names::DELETE_TASK,
            "Delete a specific task.",
            vec![ToolParameter::string("task_id", "The unique ID of the task to delete.")],
        ),
    ]
}
