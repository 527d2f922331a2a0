//! Completion statistics, the week strip and per-subject progress.
//!
//! ## Percentages
//!
//! Every percentage is `part / whole * 100` rounded half up to a whole
//! number, and 0 when `whole` is 0:
//!
//! ```text
//! 1 of 3  ->  33.33  ->  33
//! 1 of 8  ->  12.5   ->  13
//! 2 of 3  ->  66.67  ->  67
//! ```
//!
//! The rounding is done in integers so exact halves never drift.

use super::agenda::subjects;
use super::clock::is_overdue;
use super::task::{Priority, Task};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Number of days in the week strip, today included.
pub const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub pending: usize,
    pub completed: usize,
    pub overdue_count: usize,
    pub completion_rate_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub date: NaiveDate,
    pub is_today: bool,
    pub task_count: usize,
    pub has_high_priority: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectProgress {
    pub subject: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// `part / whole` as a whole percentage, rounded half up.
pub fn round_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    ((part * 200 + whole) / (whole * 2)) as u32
}

pub fn stats(tasks: &[Task], now: NaiveDateTime) -> Stats {
    let pending = tasks.iter().filter(|task| task.is_pending()).count();
    let completed = tasks.len() - pending;
    let overdue_count = tasks
        .iter()
        .filter(|task| task.is_pending() && is_overdue(task.due_date, now))
        .count();

    Stats {
        pending,
        completed,
        overdue_count,
        completion_rate_percent: round_percent(completed, tasks.len()),
    }
}

/// One bucket per calendar day from today through six days ahead.
///
/// A task lands in a bucket when its due date falls on that calendar day,
/// regardless of the time of day.
pub fn week_buckets(tasks: &[Task], now: NaiveDateTime) -> Vec<WeekBucket> {
    let today = now.date();

    (0..WEEK_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let due_that_day: Vec<&Task> = tasks
                .iter()
                .filter(|task| task.is_pending() && task.due_date.date() == date)
                .collect();

            WeekBucket {
                date,
                is_today: offset == 0,
                task_count: due_that_day.len(),
                has_high_priority: due_that_day.iter().any(|task| task.priority == Priority::High),
            }
        })
        .collect()
}

pub fn week_total(buckets: &[WeekBucket]) -> usize {
    buckets.iter().map(|bucket| bucket.task_count).sum()
}

/// Completion per subject, best first. Equal percentages keep first-appearance order.
pub fn subject_progress(tasks: &[Task]) -> Vec<SubjectProgress> {
    let mut progress: Vec<SubjectProgress> = subjects(tasks)
        .into_iter()
        .map(|subject| {
            let (completed, total) = tasks
                .iter()
                .filter(|task| task.subject == subject)
                .fold((0, 0), |(completed, total), task| {
                    (completed + usize::from(task.completed), total + 1)
                });

            SubjectProgress {
                percentage: round_percent(completed, total),
                subject,
                completed,
                total,
            }
        })
        .collect();

    progress.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    progress
}
