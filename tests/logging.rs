#[cfg(test)]
mod tests {
    use todo_cli::libs::config::Config;
    use todo_cli::libs::logging;
    use todo_cli::libs::messages::macros::is_debug_mode;

    // One test only: the subscriber and the debug switch are process-wide.
    #[test]
    fn test_debug_mode_follows_config() {
        assert!(!is_debug_mode());

        let quiet = Config::from_lookup(|_| None);
        assert!(!logging::init(&quiet));
        assert!(!is_debug_mode());

        let debug = Config::from_lookup(|key| (key == "TODO_DEBUG").then(|| "1".to_string()));
        assert!(logging::init(&debug));
        assert!(is_debug_mode());

        // a second subscriber cannot be installed, but the switch still follows the config
        assert!(!logging::init(&quiet));
        assert!(!is_debug_mode());
    }
}
