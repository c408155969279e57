use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only completed tasks
    #[arg(long, conflicts_with = "pending")]
    completed: bool,
    /// Show only pending tasks
    #[arg(long)]
    pending: bool,
    /// Print tasks as JSON records instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(store: &mut TaskStore, config: &Config, args: ListArgs) -> Result<()> {
    let (tasks, header) = if args.completed {
        (store.get_completed_tasks(), Message::CompletedTasksHeader)
    } else if args.pending {
        (store.get_pending_tasks(), Message::PendingTasksHeader)
    } else {
        (store.get_all_tasks(), Message::TasksHeader)
    };

    if args.json {
        println!("{}", View::tasks_json(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(header);
    View::tasks(&tasks, config);
    Ok(())
}
