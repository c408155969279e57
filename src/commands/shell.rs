//! Interactive session.
//!
//! Reads one command per line and runs it against a single store that
//! lives until the session ends. Lines are split with shell quoting rules,
//! so `add "Buy milk" -d "2 litres"` works as it would on the command
//! line. A failing command is reported and the session carries on.
//!
//! Input comes from a `dialoguer` prompt when stdin is a terminal and is
//! read line by line otherwise, which lets a script be piped in. Piped bytes
//! that are not UTF-8 are replaced, so such a line fails as an unknown
//! command instead of ending the session.

use super::{execute, BIN_NAME};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        metadata::{APP_NAME, APP_TAGLINE, APP_VERSION},
    },
    msg_debug, msg_error, msg_print, msg_warning,
    store::TaskStore,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, StdinLock};

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

enum SessionInput {
    Terminal { prompt: String },
    Piped(StdinLock<'static>),
}

impl SessionInput {
    fn new(config: &Config) -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            SessionInput::Terminal {
                prompt: config.prompt.clone(),
            }
        } else {
            SessionInput::Piped(stdin.lock())
        }
    }

    /// Next line of input, or `None` once input is exhausted or interrupted.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self {
            SessionInput::Terminal { prompt } => {
                let result = Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt(prompt.as_str())
                    .allow_empty(true)
                    .interact_text();
                match result {
                    Ok(line) => Ok(Some(line)),
                    Err(err) if is_interrupted(&err) => Ok(None),
                    Err(err) => Err(io::Error::other(err.to_string())),
                }
            }
            SessionInput::Piped(reader) => read_piped_line(reader),
        }
    }
}

/// Reads one `\n`-terminated line, decoding it lossily.
fn read_piped_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn is_interrupted(err: &dialoguer::Error) -> bool {
    std::error::Error::source(err)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|source| source.kind() == io::ErrorKind::Interrupted)
}

pub fn cmd(store: &mut TaskStore, config: &Config) -> Result<()> {
    msg_print!(
        Message::SessionBanner {
            app_name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            tagline: APP_TAGLINE.to_string(),
        },
        true
    );
    msg_print!(Message::SessionCommands, true);

    let mut input = SessionInput::new(config);
    loop {
        let line = match input.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                msg_print!(Message::SessionInterrupted);
                break;
            }
            Err(err) => {
                msg_error!(Message::SessionInputFailed(err.to_string()));
                break;
            }
        };

        if execute_line(store, config, &line) == SessionControl::Exit {
            break;
        }
    }

    Ok(())
}

/// Handles one line of session input.
pub fn execute_line(store: &mut TaskStore, config: &Config, line: &str) -> SessionControl {
    let line = line.trim();
    if line.is_empty() {
        return SessionControl::Continue;
    }
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        msg_print!(Message::SessionGoodbye);
        return SessionControl::Exit;
    }

    let Some(tokens) = shlex::split(line) else {
        msg_warning!(Message::SessionUnbalancedQuotes);
        return SessionControl::Continue;
    };
    msg_debug!("session command: {:?}", tokens);

    let code = execute(store, config, std::iter::once(BIN_NAME.to_string()).chain(tokens));
    msg_debug!("session command finished with exit code {}", code);

    SessionControl::Continue
}
