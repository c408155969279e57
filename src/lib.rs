//! # todo - a minimal command-line task manager
//!
//! Tasks live in memory for the duration of one run: either a single
//! command (`todo add "Buy milk"`) or an interactive session started by
//! running `todo` without a command.
//!
//! ## Layout
//!
//! - **store**: [`store::TaskStore`], the owner of all tasks, with CRUD and
//!   completed/pending queries
//! - **libs**: the task entity and its validation rules, messages, table
//!   rendering, configuration and logging
//! - **commands**: the `clap` front end and the interactive session
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::store::TaskStore;
//!
//! let mut store = TaskStore::new();
//! let task = store.add_task("Buy milk", "")?;
//! assert_eq!(task.id(), "1");
//! assert!(store.complete_task("1"));
//! assert_eq!(store.get_completed_tasks().len(), 1);
//! # Ok::<(), todo_cli::libs::task::ValidationError>(())
//! ```

pub mod commands;
pub mod libs;
pub mod store;
