//! Persistence layer for studydesk.
//!
//! State lives in a few durable key-value slots inside a local SQLite
//! database. The task list is one JSON document under `academicTasks`, and
//! the colour theme is a bare string under `theme`. Both layouts are shared
//! with earlier saved data, so they must round-trip byte for byte.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studydesk::db::{storage::SqliteStorage, tasks::Tasks};
//! use chrono::Utc;
//!
//! let storage = SqliteStorage::new()?;
//! let tasks = Tasks::load(storage, Utc::now())?;
//! println!("{} tasks", tasks.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// SQLite connection management.
pub mod db;

/// Key-value slot abstraction and its SQLite and in-memory backends.
pub mod storage;

/// The task store: load, retention sweep, CRUD with write-through.
pub mod tasks;

/// The saved colour theme.
pub mod theme;
