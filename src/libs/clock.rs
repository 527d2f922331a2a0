//! Wall-clock comparisons against due dates.
//!
//! Due dates are naive local date-times, so every comparison here takes
//! `now` as the caller's local wall-clock value. Nothing in this module
//! reads the system clock except [`local_now`].

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Hours left at which a task becomes urgent (inclusive).
pub const URGENT_WINDOW_HOURS: i64 = 24;

/// Hours left at which a task becomes due soon (inclusive).
pub const SOON_WINDOW_HOURS: i64 = 72;

/// Due time used when a task is given a date but no time.
pub const DEFAULT_DUE_TIME: &str = "23:59";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Urgent,
    Soon,
    Later,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Soon => "soon",
            Urgency::Later => "later",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current local time. Everything else takes `now` as a parameter.
pub fn local_now() -> DateTime<Local> {
    Local::now()
}

/// Signed time from `now` until `due`; negative once the task is overdue.
pub fn time_until(due: NaiveDateTime, now: NaiveDateTime) -> Duration {
    due - now
}

/// Overdue tasks count as urgent.
pub fn urgency(due: NaiveDateTime, now: NaiveDateTime) -> Urgency {
    let remaining = time_until(due, now);
    if remaining <= Duration::hours(URGENT_WINDOW_HOURS) {
        Urgency::Urgent
    } else if remaining <= Duration::hours(SOON_WINDOW_HOURS) {
        Urgency::Soon
    } else {
        Urgency::Later
    }
}

pub fn is_overdue(due: NaiveDateTime, now: NaiveDateTime) -> bool {
    due < now
}

/// Combines a `YYYY-MM-DD` date and an `HH:MM` time into a due date with zero seconds.
pub fn parse_due(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", date, e))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|e| format!("invalid time '{}': {}", time, e))?;

    Ok(date.and_time(time))
}
