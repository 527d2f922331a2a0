//! The task store.
//!
//! [`Tasks`] owns the in-memory task list for the lifetime of the process and
//! mirrors it into the `academicTasks` slot of a [`Storage`]. Every mutator
//! writes the whole list back before returning; there is no batching.
//!
//! Loading is forgiving: an absent slot is an empty list, a slot that is not
//! a JSON array is dropped, and array elements that do not parse as tasks
//! are skipped one by one. Both losses are reported through [`LoadOutcome`]
//! rather than failing startup. Completed tasks older than the retention
//! window are purged right after loading.
//!
//! Callers always pass the current time explicitly.

use super::storage::{Storage, StorageError};
use crate::libs::task::{Task, TaskError, TaskInput};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Slot holding the JSON task array.
pub const TASKS_KEY: &str = "academicTasks";

/// Completed tasks are kept for this many days after completion.
pub const RETENTION_DAYS: i64 = 7;

/// What happened while the store was loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Completed tasks removed by the retention sweep.
    pub purged: usize,
    /// Array elements that did not parse as a task and were left out.
    pub skipped: usize,
    /// The slot held unreadable data and the store started empty.
    pub recovered_from_corruption: bool,
}

pub struct Tasks<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
    outcome: LoadOutcome,
}

impl<S: Storage> Tasks<S> {
    /// Loads the store with the default seven-day retention window.
    pub fn load(storage: S, now: DateTime<Utc>) -> Result<Self, TaskError> {
        Self::load_with_retention(storage, now, Duration::days(RETENTION_DAYS))
    }

    pub fn load_with_retention(storage: S, now: DateTime<Utc>, retention: Duration) -> Result<Self, TaskError> {
        let mut outcome = LoadOutcome::default();

        let tasks = match storage.get(TASKS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(records) => records
                    .into_iter()
                    .filter_map(|record| match serde_json::from_value::<Task>(record) {
                        Ok(task) => Some(task),
                        Err(error) => {
                            warn!(%error, "skipping unreadable stored task");
                            outcome.skipped += 1;
                            None
                        }
                    })
                    .collect(),
                Err(error) => {
                    warn!(%error, "stored tasks are unreadable, starting with an empty list");
                    outcome.recovered_from_corruption = true;
                    Vec::new()
                }
            },
        };

        let mut store = Tasks { storage, tasks, outcome };
        store.normalize();
        store.outcome.purged = store.sweep(now, retention);
        if store.outcome.purged > 0 {
            info!(purged = store.outcome.purged, "removed expired completed tasks");
            store.save()?;
        }
        debug!(count = store.tasks.len(), "task store loaded");

        Ok(store)
    }

    pub fn outcome(&self) -> LoadOutcome {
        self.outcome
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn create(&mut self, input: TaskInput, now: DateTime<Utc>) -> Result<Task, TaskError> {
        let input = input.validate()?;
        let task = Task::new(self.next_id(now), input, now);

        self.tasks.push(task.clone());
        self.save()?;
        info!(id = %task.id, title = %task.title, "task created");

        Ok(task)
    }

    pub fn update(&mut self, id: &str, input: TaskInput) -> Result<Task, TaskError> {
        let input = input.validate()?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        task.apply(input);
        let updated = task.clone();
        self.save()?;
        info!(id, "task updated");

        Ok(updated)
    }

    /// Marks a task completed. Completing an already completed task changes nothing.
    pub fn complete(&mut self, id: &str, now: DateTime<Utc>) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        if task.completed {
            debug!(id, "task already completed");
            return Ok(task.clone());
        }

        task.completed = true;
        task.completed_at = Some(now);
        let completed = task.clone();
        self.save()?;
        info!(id, "task completed");

        Ok(completed)
    }

    /// Removes a task, returning whether it existed. The store is saved either way.
    pub fn delete(&mut self, id: &str) -> Result<bool, TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;

        self.save()?;
        if removed {
            info!(id, "task deleted");
        }

        Ok(removed)
    }

    /// Writes the full snapshot to the slot.
    pub fn save(&mut self) -> Result<(), TaskError> {
        let snapshot = serde_json::to_string(&self.tasks).map_err(StorageError::from)?;
        self.storage.set(TASKS_KEY, &snapshot)?;
        debug!(count = self.tasks.len(), "task store saved");

        Ok(())
    }

    /// Restores the one-task-per-id and pending-has-no-completion-time invariants.
    fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.tasks.retain(|task| {
            let first = seen.insert(task.id.clone());
            if !first {
                warn!(id = %task.id, "dropping task with duplicate id");
            }
            first
        });

        for task in self.tasks.iter_mut().filter(|task| !task.completed) {
            task.completed_at = None;
        }
    }

    /// Drops completed tasks whose completion time is not within `retention` of `now`.
    fn sweep(&mut self, now: DateTime<Utc>, retention: Duration) -> usize {
        let cutoff = now - retention;
        let before = self.tasks.len();

        self.tasks.retain(|task| {
            if !task.completed {
                return true;
            }
            task.completed_at.is_some_and(|completed_at| completed_at > cutoff)
        });

        before - self.tasks.len()
    }

    /// Millisecond timestamp of `now`, bumped until no task uses it.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
