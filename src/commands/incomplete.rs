use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct IncompleteArgs {
    /// ID of the task to mark as incomplete
    id: String,
}

pub fn cmd(store: &mut TaskStore, _config: &Config, args: IncompleteArgs) -> Result<()> {
    if !store.incomplete_task(&args.id) {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    }

    msg_success!(Message::TaskIncompleted(args.id));
    Ok(())
}
