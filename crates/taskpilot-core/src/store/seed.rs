//! Demo tasks a fresh session starts with

use crate::types::{Priority, Task, TaskStatus};
use chrono::{Duration, Utc};

/// The three starter tasks, in display order
pub fn demo_tasks() -> Vec<Task> {
    let now = Utc::now();
    vec![
        Task {
            id: "1".to_string(),
            title: "Setup WSL 2 Environment".to_string(),
            description: "Ensure Ubuntu-22.04 is installed and the default version is set to 2.".to_string(),
            priority: Priority::High,
            status: TaskStatus::Completed,
            category: "Setup".to_string(),
            created_at: now - Duration::days(1),
            due_date: None,
        },
        Task {
            id: "2".to_string(),
            title: "Configure Neon Database".to_string(),
            description: "Create a new project on Neon and get the connection string for FastAPI.".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            category: "Backend".to_string(),
            created_at: now - Duration::hours(12),
            due_date: None,
        },
        Task {
            id: "3".to_string(),
            title: "Implement Better Auth".to_string(),
            description: "Integrate Better Auth with the Next.js frontend and secure the FastAPI endpoints with JWT.".to_string(),
            priority: Priority::High,
            status: TaskStatus::Pending,
            category: "Auth".to_string(),
            created_at: now,
            due_date: None,
        },
    ]
}
