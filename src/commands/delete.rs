use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: String,
}

pub fn cmd(store: &mut TaskStore, _config: &Config, args: DeleteArgs) -> Result<()> {
    if !store.delete_task(&args.id) {
        msg_bail_anyhow!(Message::TaskNotFound(args.id));
    }

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
