//! Runtime settings.
//!
//! Settings come from the environment only; nothing is read from or written
//! to disk. Every value has a default, so an empty environment is a valid
//! configuration.
//!
//! | Variable | Effect |
//! |---|---|
//! | `TODO_DEBUG` | debug mode: structured logging on stderr next to the usual console output |
//! | `RUST_LOG` | also turns on debug mode, and sets the log filter |
//! | `TODO_PROMPT` | prompt text of the interactive session (default `todo`) |
//! | `NO_COLOR` | print tables without terminal colours |
//!
//! ```rust
//! use todo_cli::libs::config::Config;
//!
//! let config = Config::from_lookup(|key| match key {
//!     "TODO_PROMPT" => Some("tasks".to_string()),
//!     _ => None,
//! });
//! assert_eq!(config.prompt, "tasks");
//! assert!(config.color);
//! ```

use super::messages::macros::DEBUG_ENV;
use std::env;

pub const PROMPT_ENV: &str = "TODO_PROMPT";
pub const NO_COLOR_ENV: &str = "NO_COLOR";
pub const LOG_ENV: &str = "RUST_LOG";

pub const DEFAULT_PROMPT: &str = "todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Install a log subscriber and record messages as `tracing` events.
    pub debug: bool,
    /// Prompt shown by the interactive session.
    pub prompt: String,
    /// Colour the status column of task tables.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let debug = lookup(DEBUG_ENV).is_some() || lookup(LOG_ENV).is_some();
        let prompt = lookup(PROMPT_ENV)
            .map(|prompt| prompt.trim().to_string())
            .filter(|prompt| !prompt.is_empty())
            .unwrap_or(defaults.prompt);
        // https://no-color.org: any non-empty value disables colour
        let color = lookup(NO_COLOR_ENV).map_or(true, |value| value.is_empty());

        Self { debug, prompt, color }
    }
}
