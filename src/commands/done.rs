use super::{open_tasks, report_task_error};
use crate::{
    libs::{clock::local_now, config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let config = Config::read()?;
    let now = local_now().with_timezone(&Utc);
    let mut tasks = open_tasks(&config, now)?;

    let already_completed = tasks.get(&args.id).is_some_and(|task| task.completed);

    match tasks.complete(&args.id, now) {
        Ok(task) if already_completed => msg_info!(Message::TaskAlreadyCompleted(task.title)),
        Ok(task) => msg_success!(Message::TaskCompleted(task.title)),
        Err(error) => report_task_error(error)?,
    }

    Ok(())
}
