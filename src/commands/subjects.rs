use super::open_tasks;
use crate::libs::{agenda, clock::local_now, config::Config, view::View};
use anyhow::Result;
use chrono::Utc;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tasks = open_tasks(&config, local_now().with_timezone(&Utc))?;

    View::subjects(&agenda::subjects(tasks.all()));

    Ok(())
}
