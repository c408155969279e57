//! Output macros for application messages.
//!
//! Messages always reach the console: errors go to stderr and everything
//! else to stdout. In debug mode each message is also recorded as a
//! `tracing` event, so the log on stderr shows user output interleaved
//! with the store's own events.
//!
//! ## Debug Mode
//!
//! Debug mode is taken from [`Config::debug`](crate::libs::config::Config)
//! and switched on by [`logging::init`](crate::libs::logging::init). The
//! macros never read the environment themselves. Until `init` runs, debug
//! mode is off.
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_error!`**: ❌ prefix, stderr
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_debug!`**: only emitted in debug mode, never printed
//! - **`msg_bail_anyhow!`**: return early with an `anyhow::Error` built from a message
//!
//! ```rust,no_run
//! use todo_cli::libs::messages::Message;
//! use todo_cli::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskAdded("1".to_string()));
//! msg_error!(Message::TaskNotFound("42".to_string()));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that switches on debug mode.
pub const DEBUG_ENV: &str = "TODO_DEBUG";

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Turns debug mode on or off for every macro in this module.
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Returns whether messages are also recorded as `tracing` events.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Prints a message, optionally surrounded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", text);
        }
        println!("{}", text);
    }};
    ($msg:expr, true) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", text);
        }
        println!("\n{}\n", text);
    }};
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", text);
        }
        println!("✅ {}", text);
    }};
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", text);
        }
        eprintln!("❌ {}", text);
    }};
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", text);
        }
        println!("⚠️ {}", text);
    }};
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {{
        let text = $msg.to_string();
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", text);
        }
        println!("ℹ️ {}", text);
    }};
}

#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)+));
        }
    };
}

/// Returns early with an `anyhow::Error` whose text is the given message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        return Err(anyhow::Error::msg($msg))
    };
}
