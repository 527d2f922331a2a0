use super::{open_tasks, report_task_error};
use crate::{
    libs::{
        clock::{local_now, parse_due},
        config::Config,
        messages::Message,
        task::{Priority, Task, TaskInput, TaskType},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

/// Fields left out keep their current values.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,

    #[arg(long)]
    title: Option<String>,

    /// homework, exam, quiz or personal
    #[arg(short = 't', long = "type")]
    task_type: Option<TaskType>,

    /// Pass an empty string to clear the subject
    #[arg(short, long)]
    subject: Option<String>,

    /// Due date as YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,

    /// Due time as HH:MM
    #[arg(long)]
    time: Option<String>,

    #[arg(short, long)]
    priority: Option<Priority>,

    #[arg(short, long)]
    notes: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let now = local_now();
    let mut tasks = open_tasks(&config, now.with_timezone(&Utc))?;

    let current = match tasks.get(&args.id) {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    let mut input = match editable_input(current) {
        Ok(input) => input,
        Err(message) => {
            msg_error!(message);
            return Ok(());
        }
    };
    if args.date.is_some() || args.time.is_some() {
        let date = args
            .date
            .unwrap_or_else(|| current.due_date.format("%Y-%m-%d").to_string());
        let time = args
            .time
            .unwrap_or_else(|| current.due_date.format("%H:%M").to_string());
        input.due_date = match parse_due(&date, &time) {
            Ok(due_date) => due_date,
            Err(reason) => {
                msg_error!(Message::InvalidTaskInput(reason));
                return Ok(());
            }
        };
    }
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(task_type) = args.task_type {
        input.task_type = task_type;
    }
    if let Some(subject) = args.subject {
        input.subject = subject;
    }
    if let Some(priority) = args.priority {
        input.priority = priority;
    }
    if let Some(notes) = args.notes {
        input.notes = notes;
    }

    match tasks.update(&args.id, input) {
        Ok(task) => msg_success!(Message::TaskUpdated(task.title)),
        Err(error) => report_task_error(error)?,
    }

    Ok(())
}

/// Current fields of a task as edit input. Completed tasks are not editable.
pub fn editable_input(task: &Task) -> Result<TaskInput, Message> {
    if task.completed {
        return Err(Message::TaskNotEditable(task.title.clone()));
    }
    Ok(TaskInput::from_task(task))
}
