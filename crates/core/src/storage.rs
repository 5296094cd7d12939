use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read stored value '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write stored value '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Durable key-value store the task list and theme are persisted through.
/// Injected so the callers stay testable without touching the filesystem.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One file per key inside the resolved data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            source: err,
        })
    }
}

/// In-process store used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().unwrap_or_else(|err| err.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(|err| err.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trips_values() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.get("todos").unwrap().is_none());
        storage.set("todos", "[]").unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_keeps_keys_separate() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("todos", "[]").unwrap();
        storage.set("theme", "dark").unwrap();

        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_storage_overwrites_in_place() {
        let storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
