//! Log subscriber setup.
//!
//! In normal mode nothing is installed. In debug mode a
//! `tracing-subscriber` formatter writes every event to stderr, filtered by
//! `RUST_LOG` (default `debug`), and the `msg_*!` macros record each message
//! as an event on top of printing it.

use super::config::Config;
use super::messages::macros::set_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "debug";

/// Applies the debug setting of `config` and installs the global subscriber
/// when it is on.
///
/// Returns `true` if a subscriber was installed by this call.
pub fn init(config: &Config) -> bool {
    set_debug_mode(config.debug);
    if !config.debug {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
