//! # Studydesk - academic task dashboard
//!
//! A command-line tracker for homework, exams, quizzes and personal tasks.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete and delete tasks
//! - **Agenda Views**: Urgent dashboard, pending list, per-subject filter
//! - **Weekly Strip**: Tasks due on each of the next seven days
//! - **Progress**: Completion rate overall and per subject
//! - **Retention**: Completed tasks are purged a week after completion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studydesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
