//! Core library modules for the todo application.
//!
//! - **task**: the task entity, its validation rules and interchange record
//! - **config**: environment-driven runtime settings
//! - **logging**: `tracing` subscriber setup for debug mode
//! - **messages**: user-facing text and the `msg_*!` output macros
//! - **view**: table rendering of task lists
//! - **metadata**: build-time application metadata
//!
//! ```rust
//! use todo_cli::libs::task::Task;
//! use todo_cli::libs::view::View;
//!
//! let task = Task::new("1", "Buy milk", "2 litres")?;
//! let table = View::tasks_table(&[task], false);
//! assert!(table.to_string().contains("Buy milk"));
//! # Ok::<(), todo_cli::libs::task::ValidationError>(())
//! ```

pub mod config;
pub mod logging;
pub mod messages;
pub mod metadata;
pub mod task;
pub mod view;
