#[cfg(test)]
mod tests {
    use test_context::{test_context, TestContext};
    use todo_cli::commands::shell::{execute_line, SessionControl};
    use todo_cli::commands::{execute, EXIT_FAILURE, EXIT_SUCCESS};
    use todo_cli::libs::config::Config;
    use todo_cli::store::TaskStore;

    struct CommandTestContext {
        store: TaskStore,
        config: Config,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            CommandTestContext {
                store: TaskStore::new(),
                config: Config {
                    color: false,
                    ..Config::default()
                },
            }
        }
    }

    impl CommandTestContext {
        fn run(&mut self, args: &[&str]) -> u8 {
            execute(&mut self.store, &self.config, std::iter::once("todo").chain(args.iter().copied()))
        }

        fn line(&mut self, line: &str) -> SessionControl {
            execute_line(&mut self.store, &self.config, line)
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["add", "Buy groceries", "-d", "Milk, bread, eggs"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["add", "Walk dog", "--description", "Evening"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["add", "No description"]), EXIT_SUCCESS);

        let task = ctx.store.get_task_by_id("1").unwrap();
        assert_eq!(task.title(), "Buy groceries");
        assert_eq!(task.description(), "Milk, bread, eggs");
        assert_eq!(ctx.store.get_task_by_id("2").unwrap().description(), "Evening");
        assert_eq!(ctx.store.get_task_by_id("3").unwrap().description(), "");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_rejects_invalid_input(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["add", ""]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["add", "   "]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["add", &"A".repeat(201)]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["add", "Title", "-d", &"A".repeat(1001)]), EXIT_FAILURE);
        assert!(ctx.store.is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_command(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["list"]), EXIT_SUCCESS);

        ctx.run(&["add", "Task 1"]);
        ctx.run(&["add", "Task 2"]);
        ctx.run(&["complete", "2"]);
        assert_eq!(ctx.run(&["list"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["list", "--completed"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["list", "--pending"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["list", "--json"]), EXIT_SUCCESS);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_filters_are_exclusive(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["list", "--completed", "--pending"]), EXIT_FAILURE);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_command(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Old Title", "-d", "Old Description"]);

        assert_eq!(ctx.run(&["update", "1", "--title", "New Title"]), EXIT_SUCCESS);
        let task = ctx.store.get_task_by_id("1").unwrap();
        assert_eq!(task.title(), "New Title");
        assert_eq!(task.description(), "Old Description");

        assert_eq!(ctx.run(&["update", "1", "-d", "New Description"]), EXIT_SUCCESS);
        assert_eq!(ctx.store.get_task_by_id("1").unwrap().description(), "New Description");

        assert_eq!(ctx.run(&["update", "1", "--title", "Both", "--description", "Changed"]), EXIT_SUCCESS);
        let task = ctx.store.get_task_by_id("1").unwrap();
        assert_eq!(task.title(), "Both");
        assert_eq!(task.description(), "Changed");

        assert_eq!(ctx.run(&["update", "1"]), EXIT_SUCCESS);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_command_failures(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Old Title"]);

        assert_eq!(ctx.run(&["update", "nonexistent-id", "--title", "New Title"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["update", "1", "--title", ""]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["update", "1", "--title", &"A".repeat(201)]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["update", "1", "--description", &"A".repeat(1001)]), EXIT_FAILURE);
        assert_eq!(ctx.store.get_task_by_id("1").unwrap().title(), "Old Title");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_complete_and_incomplete_commands(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Task"]);

        assert_eq!(ctx.run(&["complete", "1"]), EXIT_SUCCESS);
        assert!(ctx.store.get_task_by_id("1").unwrap().completed());
        assert_eq!(ctx.run(&["complete", "1"]), EXIT_SUCCESS);

        assert_eq!(ctx.run(&["incomplete", "1"]), EXIT_SUCCESS);
        assert!(!ctx.store.get_task_by_id("1").unwrap().completed());

        assert_eq!(ctx.run(&["complete", "99"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["incomplete", "99"]), EXIT_FAILURE);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_delete_command(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Task"]);

        assert_eq!(ctx.run(&["delete", "1"]), EXIT_SUCCESS);
        assert!(ctx.store.is_empty());
        assert_eq!(ctx.run(&["delete", "1"]), EXIT_FAILURE);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_malformed_commands(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["frobnicate"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["add"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["complete"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["delete", "1", "2"]), EXIT_FAILURE);
        assert_eq!(ctx.run(&["add", "Title", "--priority", "high"]), EXIT_FAILURE);
        assert!(ctx.store.is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_help_is_not_a_failure(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(&["--help"]), EXIT_SUCCESS);
        assert_eq!(ctx.run(&["add", "--help"]), EXIT_SUCCESS);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_session_lines_share_one_store(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.line("add \"Buy milk\" -d \"2 litres\""), SessionControl::Continue);
        assert_eq!(ctx.line("add 'Walk dog'"), SessionControl::Continue);
        assert_eq!(ctx.line("complete 2"), SessionControl::Continue);
        assert_eq!(ctx.line("list"), SessionControl::Continue);

        let task = ctx.store.get_task_by_id("1").unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.description(), "2 litres");
        assert!(ctx.store.get_task_by_id("2").unwrap().completed());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_session_survives_errors(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.line("add \"\""), SessionControl::Continue);
        assert_eq!(ctx.line("delete 42"), SessionControl::Continue);
        assert_eq!(ctx.line("bogus command"), SessionControl::Continue);
        assert_eq!(ctx.line("add \"unterminated"), SessionControl::Continue);
        assert_eq!(ctx.line("   "), SessionControl::Continue);
        assert_eq!(ctx.line("--help"), SessionControl::Continue);
        assert!(ctx.store.is_empty());

        assert_eq!(ctx.line("add Valid"), SessionControl::Continue);
        assert_eq!(ctx.store.get_task_by_id("1").unwrap().title(), "Valid");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_session_exit_words(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.line("exit"), SessionControl::Exit);
        assert_eq!(ctx.line("  QUIT "), SessionControl::Exit);
        assert_eq!(ctx.line("Exit"), SessionControl::Exit);
    }
}
