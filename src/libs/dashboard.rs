//! The computed view model the presentation layer renders.
//!
//! [`Dashboard::build`] runs every derivation against one task snapshot and
//! one `now`, and packages the results with their display strings. Nothing is
//! cached: callers rebuild after each mutation.

use super::agenda::{completed_tasks, filtered_tasks, subjects};
use super::clock::{is_overdue, urgency, Urgency};
use super::formatter::{format_due_date, format_due_time, format_heading_date, format_weekday, time_until_due};
use super::messages::Message;
use super::progress::{self, Stats, SubjectProgress, WeekBucket};
use super::selection::{Selection, ViewKind};
use super::task::{Priority, Task, TaskType};
use chrono::{Datelike, NaiveDateTime};

/// Most dots drawn under a day in the week strip.
pub const MAX_DAY_DOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub task_type: TaskType,
    pub title: String,
    pub subject: String,
    pub priority: Priority,
    pub urgency: Urgency,
    pub completed: bool,
    /// Pending and past due.
    pub overdue: bool,
    pub due_date: String,
    pub due_time: String,
    /// Countdown, shown only for pending tasks that are not overdue.
    pub time_until: Option<String>,
    pub notes: Option<String>,
    /// Complete and edit apply to pending tasks only; delete always applies.
    pub can_complete: bool,
    pub can_edit: bool,
}

impl TaskCard {
    pub fn new(task: &Task, now: NaiveDateTime) -> Self {
        let overdue = task.is_pending() && is_overdue(task.due_date, now);

        TaskCard {
            id: task.id.clone(),
            task_type: task.task_type,
            title: task.title.clone(),
            subject: task.subject.clone(),
            priority: task.priority,
            urgency: urgency(task.due_date, now),
            completed: task.completed,
            overdue,
            due_date: format_due_date(&task.due_date),
            due_time: format_due_time(&task.due_date),
            time_until: (task.is_pending() && !overdue).then(|| time_until_due(task.due_date, now)),
            notes: (!task.notes.is_empty()).then(|| task.notes.clone()),
            can_complete: task.is_pending(),
            can_edit: task.is_pending(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl EmptyState {
    /// Text shown when the active view has no tasks. Unknown views use the pending text.
    pub fn for_view(view: &ViewKind) -> Self {
        let (title, message) = match view {
            ViewKind::Dashboard => (Message::EmptyDashboardTitle, Message::EmptyDashboardMessage),
            ViewKind::Subjects => (Message::EmptySubjectsTitle, Message::EmptySubjectsMessage),
            ViewKind::Pending | ViewKind::Completed | ViewKind::Unknown(_) => {
                (Message::EmptyPendingTitle, Message::EmptyPendingMessage)
            }
        };

        EmptyState {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectChip {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub bucket: WeekBucket,
    pub weekday: String,
    pub day_number: u32,
    pub dots: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub view: ViewKind,
    pub heading: String,
    pub summary: String,
    pub stats: Stats,
    /// Present only in the subjects view.
    pub subject_filter: Option<Vec<SubjectChip>>,
    pub cards: Vec<TaskCard>,
    /// Present only when `cards` is empty.
    pub empty_state: Option<EmptyState>,
    pub completed: Vec<TaskCard>,
    pub week: Vec<WeekDay>,
    pub week_total: usize,
    pub progress: Vec<SubjectProgress>,
}

impl Dashboard {
    pub fn build(tasks: &[Task], selection: &Selection, now: NaiveDateTime) -> Self {
        let stats = progress::stats(tasks, now);
        let summary = if stats.pending > 0 {
            Message::PendingSummary(stats.pending)
        } else {
            Message::AllCaughtUp
        };

        let subject_filter = (*selection.current_view() == ViewKind::Subjects).then(|| {
            subjects(tasks)
                .into_iter()
                .map(|name| SubjectChip {
                    active: selection.selected_subject() == Some(name.as_str()),
                    name,
                })
                .collect()
        });

        let cards: Vec<TaskCard> = filtered_tasks(tasks, selection, now)
            .into_iter()
            .map(|task| TaskCard::new(task, now))
            .collect();
        let empty_state = cards
            .is_empty()
            .then(|| EmptyState::for_view(selection.current_view()));

        let buckets = progress::week_buckets(tasks, now);
        let week_total = progress::week_total(&buckets);
        let week = buckets
            .into_iter()
            .map(|bucket| WeekDay {
                weekday: format_weekday(&bucket.date),
                day_number: bucket.date.day(),
                dots: bucket.task_count.min(MAX_DAY_DOTS),
                bucket,
            })
            .collect();

        Dashboard {
            view: selection.current_view().clone(),
            heading: format_heading_date(&now.date()),
            summary: summary.to_string(),
            stats,
            subject_filter,
            cards,
            empty_state,
            completed: completed_tasks(tasks)
                .into_iter()
                .map(|task| TaskCard::new(task, now))
                .collect(),
            week,
            week_total,
            progress: progress::subject_progress(tasks),
        }
    }
}
