use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    id: String,
    /// New title for the task
    #[arg(long)]
    title: Option<String>,
    /// New description for the task
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(store: &mut TaskStore, _config: &Config, args: UpdateArgs) -> Result<()> {
    let updated = store.update_task(&args.id, args.title.as_deref(), args.description.as_deref())?;
    if !updated {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    }

    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}
