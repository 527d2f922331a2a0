use super::storage::StorageError;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "studydesk.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the per-user data directory.
    pub fn new() -> Result<Db, StorageError> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| StorageError::Directory(e.to_string()))?;

        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database at an explicit path.
    pub fn open(path: &Path) -> Result<Db, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Directory(e.to_string()))?;
            }
        }
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db, StorageError> {
        Ok(Db {
            conn: Connection::open_in_memory()?,
        })
    }
}
