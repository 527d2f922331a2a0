use super::{open_tasks, report_task_error};
use crate::{
    libs::{
        clock::{local_now, parse_due, DEFAULT_DUE_TIME},
        config::Config,
        messages::Message,
        task::{Priority, TaskInput, TaskType},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// homework, exam, quiz or personal
    #[arg(short = 't', long = "type", default_value = "homework")]
    task_type: TaskType,

    #[arg(short, long)]
    subject: Option<String>,

    /// Due date as YYYY-MM-DD (default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Due time as HH:MM (default: 23:59)
    #[arg(long)]
    time: Option<String>,

    /// high, medium or low (default from configuration)
    #[arg(short, long)]
    priority: Option<Priority>,

    #[arg(short, long)]
    notes: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let now = local_now();
    let mut tasks = open_tasks(&config, now.with_timezone(&Utc))?;

    let date = args
        .date
        .unwrap_or_else(|| now.date_naive().format("%Y-%m-%d").to_string());
    let due_date = match parse_due(&date, args.time.as_deref().unwrap_or(DEFAULT_DUE_TIME)) {
        Ok(due_date) => due_date,
        Err(reason) => {
            msg_error!(Message::InvalidTaskInput(reason));
            return Ok(());
        }
    };

    let input = TaskInput::new(args.task_type, &args.title, due_date)
        .subject(args.subject.as_deref().unwrap_or(""))
        .priority(args.priority.unwrap_or(config.tasks().default_priority))
        .notes(args.notes.as_deref().unwrap_or(""));

    match tasks.create(input, now.with_timezone(&Utc)) {
        Ok(task) => msg_success!(Message::TaskCreated(task.id)),
        Err(error) => report_task_error(error)?,
    }

    Ok(())
}
