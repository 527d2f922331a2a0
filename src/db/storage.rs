//! Durable key-value slots.
//!
//! All persisted state is a handful of string values addressed by string
//! keys. [`SqliteStorage`] keeps them in a single `storage` table;
//! [`MemoryStorage`] keeps them in a map and is what tests and embedders use
//! when nothing should touch the disk.

use super::db::Db;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use thiserror::Error;

const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create data directory: {0}")]
    Directory(String),
    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string-keyed store of string values.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the slot table in the default database.
    pub fn new() -> Result<SqliteStorage, StorageError> {
        Self::from_db(Db::new()?)
    }

    pub fn from_db(db: Db) -> Result<SqliteStorage, StorageError> {
        db.conn.execute(SCHEMA_STORAGE, [])?;

        Ok(SqliteStorage { conn: db.conn })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a slot, as if an earlier session had written it.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
