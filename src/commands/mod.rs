//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. Task commands share one flow:
//!
//! 1. read the configuration
//! 2. take `now` from the local clock
//! 3. load the store (the retention sweep runs here) and report the outcome
//! 4. run the operation and print the result as a [`Message`]
//!
//! Expected failures (unknown id, empty title, bad date) are printed and
//! the command exits cleanly. Storage failures propagate as errors.

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod show;
pub mod subjects;
pub mod theme;

use crate::{
    db::{storage::SqliteStorage, tasks::Tasks},
    libs::{config::Config, messages::Message, task::TaskError},
    msg_error, msg_info, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit a pending task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the dashboard")]
    Show(show::ShowArgs),
    #[command(about = "List subjects")]
    Subjects,
    #[command(about = "Show or change the theme")]
    Theme(theme::ThemeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Subjects => subjects::cmd(),
            Commands::Theme(args) => theme::cmd(args),
        }
    }
}

/// Opens the SQLite store, loads the task list and reports what the load did.
fn open_tasks(config: &Config, now: DateTime<Utc>) -> Result<Tasks<SqliteStorage>> {
    let tasks = Tasks::load_with_retention(SqliteStorage::new()?, now, config.tasks().retention())?;

    let outcome = tasks.outcome();
    if outcome.recovered_from_corruption {
        msg_warning!(Message::StorageRecovered);
    }
    if outcome.skipped > 0 {
        msg_warning!(Message::TasksSkipped(outcome.skipped));
    }
    if outcome.purged > 0 {
        msg_info!(Message::TasksPurged(outcome.purged));
    }

    Ok(tasks)
}

/// Prints expected task failures; anything else is returned.
fn report_task_error(error: TaskError) -> Result<()> {
    match error {
        TaskError::NotFound(id) => msg_error!(Message::TaskNotFound(id)),
        TaskError::Validation(reason) => msg_error!(Message::InvalidTaskInput(reason)),
        TaskError::Storage(error) => return Err(error.into()),
    }
    Ok(())
}
