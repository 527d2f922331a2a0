//! Task lists shown by each view.
//!
//! These are pure functions over a task snapshot. They borrow from the
//! snapshot and never reorder or modify it.
//!
//! ## Ordering
//!
//! [`filtered_tasks`] sorts by due date, then priority (high first). The
//! sort is stable, so tasks sharing both keys stay in store order.
//! [`completed_tasks`] and [`subjects`] keep store order as well.

use super::clock::URGENT_WINDOW_HOURS;
use super::selection::{Selection, ViewKind};
use super::task::Task;
use chrono::{Duration, NaiveDateTime};

/// Pending tasks for the active view, soonest first.
pub fn filtered_tasks<'a>(tasks: &'a [Task], selection: &Selection, now: NaiveDateTime) -> Vec<&'a Task> {
    let horizon = now + Duration::hours(URGENT_WINDOW_HOURS);

    let mut filtered: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.is_pending())
        .filter(|task| match selection.current_view() {
            ViewKind::Dashboard => task.due_date <= horizon,
            ViewKind::Subjects => selection
                .selected_subject()
                .map_or(true, |subject| task.subject == subject),
            ViewKind::Pending | ViewKind::Completed | ViewKind::Unknown(_) => true,
        })
        .collect();

    filtered.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
    });

    filtered
}

pub fn completed_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.completed).collect()
}

/// Distinct non-empty subjects across all tasks, in order of first appearance.
pub fn subjects(tasks: &[Task]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for task in tasks {
        if !task.subject.is_empty() && !subjects.contains(&task.subject) {
            subjects.push(task.subject.clone());
        }
    }
    subjects
}
