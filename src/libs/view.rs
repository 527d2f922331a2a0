//! Terminal rendering of the dashboard view model.
//!
//! Every section is a `prettytable` table. The table border follows the
//! stored theme: box-drawing characters for dark, plain ASCII for light.
//! Builders return the [`Table`] so callers (and tests) can inspect it
//! before printing.

use super::dashboard::{Dashboard, EmptyState, SubjectChip, TaskCard, WeekDay};
use super::messages::Message;
use super::progress::{SubjectProgress, Stats};
use crate::db::theme::Theme;
use crate::msg_print;
use prettytable::format::{self, TableFormat};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints every section of the dashboard in display order.
    pub fn dashboard(dashboard: &Dashboard, theme: Theme) {
        msg_print!(dashboard.heading);
        msg_print!(dashboard.summary);
        msg_print!(Message::OverallProgress(dashboard.stats.completion_rate_percent));
        Self::stats(&dashboard.stats, theme).printstd();

        if let Some(chips) = &dashboard.subject_filter {
            msg_print!(Self::subject_chips(chips));
        }

        match &dashboard.empty_state {
            Some(empty) => Self::empty_state(empty),
            None => Self::tasks(&dashboard.cards, theme).printstd(),
        }

        if !dashboard.completed.is_empty() {
            msg_print!(Message::CompletedHeader(dashboard.completed.len()), true);
            Self::tasks(&dashboard.completed, theme).printstd();
        }

        msg_print!(Message::WeekHeader, true);
        Self::week(&dashboard.week, theme).printstd();
        msg_print!(Message::WeekTotal(dashboard.week_total));

        if !dashboard.progress.is_empty() {
            msg_print!(Message::ProgressHeader, true);
            Self::progress(&dashboard.progress, theme).printstd();
        }
    }

    pub fn stats(stats: &Stats, theme: Theme) -> Table {
        let mut table = Self::table(theme);
        table.set_titles(row!["PENDING", "COMPLETED", "OVERDUE"]);
        table.add_row(row![stats.pending, stats.completed, stats.overdue_count]);
        table
    }

    pub fn tasks(cards: &[TaskCard], theme: Theme) -> Table {
        let mut table = Self::table(theme);
        table.set_titles(row!["ID", "", "TITLE", "SUBJECT", "PRIORITY", "DUE", "STATUS", "NOTES"]);

        for card in cards {
            let status = if card.completed {
                "Done".to_string()
            } else {
                card.time_until.clone().unwrap_or_else(|| "Overdue".to_string())
            };

            table.add_row(row![
                card.id,
                card.task_type.icon(),
                card.title,
                card.subject,
                Self::priority_label(card),
                format!("{} {}", card.due_date, card.due_time),
                status,
                card.notes.as_deref().unwrap_or("")
            ]);
        }
        table
    }

    /// One column per day; the second row carries up to three dots, with `!`
    /// when a high-priority task is due that day.
    pub fn week(week: &[WeekDay], theme: Theme) -> Table {
        let mut table = Self::table(theme);

        let mut titles = prettytable::Row::empty();
        let mut days = prettytable::Row::empty();
        let mut dots = prettytable::Row::empty();
        for day in week {
            let weekday = if day.bucket.is_today {
                format!("[{}]", day.weekday)
            } else {
                day.weekday.clone()
            };
            titles.add_cell(prettytable::Cell::new(&weekday));
            days.add_cell(prettytable::Cell::new(&day.day_number.to_string()));

            let mut marks = "•".repeat(day.dots);
            if day.bucket.has_high_priority {
                marks.push('!');
            }
            dots.add_cell(prettytable::Cell::new(&marks));
        }

        table.set_titles(titles);
        table.add_row(days);
        table.add_row(dots);
        table
    }

    pub fn progress(progress: &[SubjectProgress], theme: Theme) -> Table {
        let mut table = Self::table(theme);
        table.set_titles(row!["SUBJECT", "COMPLETED", "TOTAL", "PROGRESS"]);
        for entry in progress {
            table.add_row(row![
                entry.subject,
                entry.completed,
                entry.total,
                format!("{}%", entry.percentage)
            ]);
        }
        table
    }

    /// Prints the distinct subjects, one per line.
    pub fn subjects(subjects: &[String]) {
        if subjects.is_empty() {
            msg_print!(Message::NoSubjects);
            return;
        }

        msg_print!(Message::SubjectsHeader);
        for subject in subjects {
            msg_print!(format!("  {}", subject));
        }
    }

    /// Filter bar line; the active subject is bracketed.
    pub fn subject_chips(chips: &[SubjectChip]) -> String {
        if chips.is_empty() {
            return Message::NoSubjects.to_string();
        }

        chips
            .iter()
            .map(|chip| {
                if chip.active {
                    format!("[{}]", chip.name)
                } else {
                    chip.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn empty_state(empty: &EmptyState) {
        msg_print!(empty.title, true);
        msg_print!(empty.message);
    }

    fn priority_label(card: &TaskCard) -> String {
        if card.overdue {
            format!("{} (overdue)", card.priority)
        } else {
            format!("{} ({})", card.priority, card.urgency)
        }
    }

    fn table(theme: Theme) -> Table {
        let mut table = Table::new();
        table.set_format(Self::format(theme));
        table
    }

    fn format(theme: Theme) -> TableFormat {
        match theme {
            Theme::Dark => *format::consts::FORMAT_BOX_CHARS,
            Theme::Light => *format::consts::FORMAT_DEFAULT,
        }
    }
}
