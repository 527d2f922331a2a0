//! Task model shared by the store, the derivation engine and the renderer.
//!
//! A [`Task`] serialises to exactly the JSON object kept in the
//! `academicTasks` slot:
//!
//! ```json
//! {
//!   "id": "1705312800000",
//!   "type": "homework",
//!   "title": "Problem set 4",
//!   "subject": "Math",
//!   "dueDate": "2024-01-16T09:00:00",
//!   "priority": "high",
//!   "notes": "",
//!   "completed": true,
//!   "createdAt": "2024-01-15T10:00:00.000Z",
//!   "completedAt": "2024-01-15T18:30:00.000Z"
//! }
//! ```
//!
//! `dueDate` is a local wall-clock value with no zone, while `createdAt` and
//! `completedAt` are UTC instants. `completedAt` is omitted while the task is
//! pending.

use crate::db::storage::StorageError;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage format of `dueDate`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors reported by task store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Invalid task: {0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Homework,
    Exam,
    Quiz,
    Personal,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [TaskType::Homework, TaskType::Exam, TaskType::Quiz, TaskType::Personal];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Homework => "homework",
            TaskType::Exam => "exam",
            TaskType::Quiz => "quiz",
            TaskType::Personal => "personal",
        }
    }

    /// Single-glyph marker used in place of the type icon.
    pub fn icon(&self) -> &'static str {
        match self {
            TaskType::Homework => "📄",
            TaskType::Exam => "📅",
            TaskType::Quiz => "⏱",
            TaskType::Personal => "●",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown task type '{}' (expected homework, exam, quiz or personal)", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: high sorts before medium, medium before low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown priority '{}' (expected high, medium or low)", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(with = "due_date_format")]
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "instant_format")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_instant_format")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Builds a fresh pending task from validated input.
    pub fn new(id: String, input: TaskInput, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            task_type: input.task_type,
            title: input.title,
            subject: input.subject,
            due_date: input.due_date,
            priority: input.priority,
            notes: input.notes,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Replaces every user-editable field, leaving identity and completion untouched.
    pub fn apply(&mut self, input: TaskInput) {
        self.task_type = input.task_type;
        self.title = input.title;
        self.subject = input.subject;
        self.due_date = input.due_date;
        self.priority = input.priority;
        self.notes = input.notes;
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// User-submitted task fields, as accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub task_type: TaskType,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    pub notes: String,
}

impl TaskInput {
    pub fn new(task_type: TaskType, title: &str, due_date: NaiveDateTime) -> Self {
        TaskInput {
            task_type,
            title: title.to_string(),
            subject: String::new(),
            due_date,
            priority: Priority::default(),
            notes: String::new(),
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    /// Copies the editable fields of an existing task.
    pub fn from_task(task: &Task) -> Self {
        TaskInput {
            task_type: task.task_type,
            title: task.title.clone(),
            subject: task.subject.clone(),
            due_date: task.due_date,
            priority: task.priority,
            notes: task.notes.clone(),
        }
    }

    /// Trims the text fields and rejects an empty title.
    ///
    /// An empty subject is accepted; it only keeps the task out of subject listings.
    pub fn validate(self) -> Result<Self, TaskError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TaskError::Validation("title must not be empty".to_string()));
        }

        Ok(TaskInput {
            title,
            subject: self.subject.trim().to_string(),
            notes: self.notes.trim().to_string(),
            ..self
        })
    }
}

/// Formats an instant the way the dashboard always stored it: UTC, milliseconds, `Z`.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

/// Parses a stored due date, tolerating a missing seconds component.
pub fn parse_due_date(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DUE_DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
}

mod due_date_format {
    use super::{parse_due_date, DUE_DATE_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(DUE_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_due_date(&raw).map_err(de::Error::custom)
    }
}

mod instant_format {
    use super::{format_instant, parse_instant};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_instant(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw).map_err(de::Error::custom)
    }
}

mod optional_instant_format {
    use super::{format_instant, parse_instant};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_str(&format_instant(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_instant(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
