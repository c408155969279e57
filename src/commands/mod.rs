//! Command-line front end.
//!
//! One file per command, each exposing its `clap` argument struct and a
//! `cmd` function that runs it against a [`TaskStore`]. Handlers report
//! success themselves and return errors (validation failures, unknown ids)
//! to [`finish`], which prints them and turns the outcome into an exit code.
//! Parsing problems never reach the store: [`execute`] reports them as
//! usage errors.

pub mod add;
pub mod complete;
pub mod delete;
pub mod incomplete;
pub mod list;
pub mod shell;
pub mod update;

use crate::{
    libs::{config::Config, messages::Message},
    msg_error, msg_print,
    store::TaskStore,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Program name used when parsing lines typed into the interactive session.
pub const BIN_NAME: &str = "todo";

const EXAMPLES: &str = "Examples:
  todo add \"Buy groceries\" -d \"Milk, bread, eggs\"
  todo list
  todo update 1 --title \"Buy groceries today\"
  todo complete 1
  todo incomplete 1
  todo delete 1

Run without a command to start an interactive session.";

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Update an existing task")]
    Update(update::UpdateArgs),
    #[command(about = "Mark a task as complete")]
    Complete(complete::CompleteArgs),
    #[command(about = "Mark a task as incomplete")]
    Incomplete(incomplete::IncompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(name = BIN_NAME, author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub fn run(self, store: &mut TaskStore, config: &Config) -> Result<()> {
        match self {
            Commands::Add(args) => add::cmd(store, config, args),
            Commands::List(args) => list::cmd(store, config, args),
            Commands::Update(args) => update::cmd(store, config, args),
            Commands::Complete(args) => complete::cmd(store, config, args),
            Commands::Incomplete(args) => incomplete::cmd(store, config, args),
            Commands::Delete(args) => delete::cmd(store, config, args),
        }
    }
}

/// Parses `args` (program name first) and runs the command.
///
/// Never fails: every problem is reported to the user and folded into the
/// returned exit code. Without a command the list of commands is shown.
pub fn execute<I, T>(store: &mut TaskStore, config: &Config, args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    match cli.command {
        Some(command) => finish(command.run(store, config)),
        None => {
            msg_print!(Message::SessionCommands);
            EXIT_SUCCESS
        }
    }
}

/// Prints a command error, if any, and maps the outcome to an exit code.
pub fn finish(result: Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            msg_error!(err);
            EXIT_FAILURE
        }
    }
}

/// Prints a `clap` error. Help and version requests are not failures.
pub fn report_parse_error(err: clap::Error) -> u8 {
    let _ = err.print();
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}
