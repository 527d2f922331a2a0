//! Human-readable date, time and countdown strings.
//!
//! ## Formats
//!
//! - Due date: `Jan 15, 2024`
//! - Due time: `3:05 PM`
//! - Heading date: `Monday, January 15, 2024`
//! - Countdown: `Overdue`, `Due in 3 days`, `Due in 1 hour`, `Due soon`
//!
//! Countdown units are whole days first, then whole hours of the remainder;
//! anything under an hour is "soon".

use super::clock::time_until;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// `"1 task"`, `"2 tasks"`: singular only for exactly one.
pub fn pluralize(count: i64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn time_until_due(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let remaining = time_until(due, now);
    if remaining < Duration::zero() {
        return "Overdue".to_string();
    }

    let days = remaining.num_days();
    let hours = (remaining - Duration::days(days)).num_hours();

    if days > 0 {
        format!("Due in {}", pluralize(days, "day"))
    } else if hours > 0 {
        format!("Due in {}", pluralize(hours, "hour"))
    } else {
        "Due soon".to_string()
    }
}

pub fn format_due_date(due: &NaiveDateTime) -> String {
    due.format("%b %-d, %Y").to_string()
}

pub fn format_due_time(due: &NaiveDateTime) -> String {
    due.format("%-I:%M %p").to_string()
}

pub fn format_heading_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Three-letter weekday, as shown in the week strip.
pub fn format_weekday(date: &NaiveDate) -> String {
    date.format("%a").to_string()
}
