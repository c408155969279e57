use clap::Parser;
use std::process::ExitCode;
use todo_cli::commands::{self, shell, Cli};
use todo_cli::libs::{config::Config, logging};
use todo_cli::store::TaskStore;

fn main() -> ExitCode {
    let config = Config::from_env();
    logging::init(&config);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return ExitCode::from(commands::report_parse_error(err)),
    };

    let mut store = TaskStore::new();
    let code = match cli.command {
        Some(command) => commands::finish(command.run(&mut store, &config)),
        None => commands::finish(shell::cmd(&mut store, &config)),
    };

    ExitCode::from(code)
}
