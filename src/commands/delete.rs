use super::open_tasks;
use crate::{
    libs::{clock::local_now, config::Config, messages::Message},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = open_tasks(&config, local_now().with_timezone(&Utc))?;

    let title = match tasks.get(&args.id) {
        Some(task) => task.title.clone(),
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    if !args.yes {
        msg_print!(format!("{} ({})", title, args.id));
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDelete.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if tasks.delete(&args.id)? {
        msg_success!(Message::TaskDeleted(args.id));
    }

    Ok(())
}
