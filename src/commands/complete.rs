use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID of the task to mark as complete
    id: String,
}

pub fn cmd(store: &mut TaskStore, _config: &Config, args: CompleteArgs) -> Result<()> {
    if !store.complete_task(&args.id) {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    }

    msg_success!(Message::TaskCompleted(args.id));
    Ok(())
}
