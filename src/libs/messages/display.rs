//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between one-shot commands and the interactive session.
//!
//! ```rust
//! use todo_cli::libs::messages::Message;
//!
//! assert_eq!(Message::TaskAdded("1".to_string()).to_string(), "Task added successfully (ID: 1)");
//! assert_eq!(Message::NoTasksFound.to_string(), "No tasks found");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully (ID: {})", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskCompleted(id) => format!("Task {} marked as complete", id),
            Message::TaskIncompleted(id) => format!("Task {} marked as incomplete", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::CompletedTasksHeader => "Completed tasks".to_string(),
            Message::PendingTasksHeader => "Pending tasks".to_string(),

            // === TASK STATUS LABELS ===
            Message::StatusDone => "✓ Done".to_string(),
            Message::StatusPending => "○ Pending".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionBanner {
                app_name,
                version,
                tagline,
            } => format!("{} v{}\n{}\n\nWelcome! Type 'exit' to quit.", app_name.to_uppercase(), version, tagline),
            Message::SessionCommands => [
                "Commands:",
                "  add         Create a new task",
                "  list        View all tasks",
                "  update      Update an existing task",
                "  complete    Mark task as done",
                "  incomplete  Mark task as not done",
                "  delete      Remove a task",
                "  exit        Exit application",
            ]
            .join("\n"),
            Message::SessionGoodbye => "Goodbye!".to_string(),
            Message::SessionInterrupted => "Exiting...".to_string(),
            Message::SessionUnbalancedQuotes => "Could not parse input: unbalanced quotes".to_string(),
            Message::SessionInputFailed(error) => format!("Failed to read input: {}", error),
        };
        write!(f, "{}", text)
    }
}
