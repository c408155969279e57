use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Short title of the task
    title: String,
    /// Detailed description of the task
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(store: &mut TaskStore, _config: &Config, args: AddArgs) -> Result<()> {
    let description = args.description.unwrap_or_default();
    let task = store.add_task(&args.title, &description)?;

    msg_success!(Message::TaskAdded(task.id().to_string()));
    Ok(())
}
