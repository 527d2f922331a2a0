//! Display implementation for studydesk messages.
//!
//! All message text is defined here, in one place, so wording stays
//! consistent between the dashboard, the task commands and the wizard.
//! Counts are pluralised with [`pluralize`], which uses the singular only
//! for exactly one.

use super::types::Message;
use crate::libs::formatter::pluralize;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created (ID: {})", id),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task not found: {}", id),
            Message::InvalidTaskInput(reason) => format!("Invalid task: {}", reason),
            Message::TasksPurged(count) => format!(
                "Removed {} past the retention period",
                pluralize(*count as i64, "completed task")
            ),
            Message::TasksSkipped(count) => format!(
                "Skipped {} that could not be read",
                pluralize(*count as i64, "saved task")
            ),
            Message::TaskNotEditable(title) => format!("Task '{}' is completed and can no longer be edited", title),
            Message::StorageRecovered => {
                "Saved tasks could not be read and were discarded. Starting with an empty list.".to_string()
            }

            // === DASHBOARD MESSAGES ===
            Message::PendingSummary(count) => format!("You have {}", pluralize(*count as i64, "pending task")),
            Message::AllCaughtUp => "All caught up! 🎉".to_string(),
            Message::OverallProgress(percent) => format!("Overall Progress: {}%", percent),
            Message::CompletedHeader(count) => format!("Completed ({})", count),
            Message::WeekHeader => "📅 Upcoming Week".to_string(),
            Message::WeekTotal(count) => format!("Next 7 days: {}", pluralize(*count as i64, "task")),
            Message::ProgressHeader => "📈 Progress by Subject".to_string(),
            Message::SubjectsHeader => "Subjects".to_string(),
            Message::NoSubjects => "No subjects yet. Add a subject to a task to see it here.".to_string(),
            Message::EmptyDashboardTitle => "All Clear!".to_string(),
            Message::EmptyDashboardMessage => {
                "No urgent tasks due within 24 hours. Great job staying on top of things!".to_string()
            }
            Message::EmptyPendingTitle => "No Pending Tasks".to_string(),
            Message::EmptyPendingMessage => "You've completed everything! Time to relax or add new tasks.".to_string(),
            Message::EmptySubjectsTitle => "No Tasks for This Subject".to_string(),
            Message::EmptySubjectsMessage => "Select a different subject or add new tasks to get started.".to_string(),

            // === THEME MESSAGES ===
            Message::ThemeCurrent(theme) => format!("Current theme: {}", theme),
            Message::ThemeChanged(theme) => format!("Theme switched to {}", theme),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTasks => "Tasks settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptRetentionDays => "Days to keep completed tasks".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptDefaultView => "View shown by default".to_string(),
            Message::PromptTheme => "Theme".to_string(),
            Message::PromptConfirmDelete => "Delete this task?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
