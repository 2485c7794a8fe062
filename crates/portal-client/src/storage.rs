// ============================================================================
// Portal Client - Key/Value Storage
// File: crates/portal-client/src/storage.rs
// ============================================================================
//! Durable string key/value cells backing the persisted login flag

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StorageError;

/// Minimal key/value storage in the shape of browser local storage.
pub trait FlagStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key is a no-op.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage that lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage persisted as a flat JSON object in a file, so values survive
/// process restarts.
///
/// The file is re-read on every access; edits made by other processes are
/// picked up on the next read. A missing or unreadable file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> HashMap<String, String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("Cannot read storage file {}: {}", self.path.display(), e);
                return HashMap::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!("Ignoring corrupt storage file {}: {}", self.path.display(), e);
            HashMap::new()
        })
    }

    fn write_items(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(items)?)?;
        Ok(())
    }
}

impl FlagStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read_items().remove(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_items();
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items();
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k"), None);

        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").as_deref(), Some("v"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k"), None);
    }

    #[test]
    fn test_file_storage_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::new(&path);
        storage.set_item("isLoggedIn", "true").unwrap();
        storage.set_item("other", "value").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("isLoggedIn").as_deref(), Some("true"));
        assert_eq!(reopened.get_item("other").as_deref(), Some("value"));
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("storage.json"));

        storage.set_item("isLoggedIn", "true").unwrap();
        storage.set_item("other", "value").unwrap();
        storage.remove_item("isLoggedIn").unwrap();

        assert_eq!(storage.get_item("isLoggedIn"), None);
        assert_eq!(storage.get_item("other").as_deref(), Some("value"));
    }

    #[test]
    fn test_missing_file_reads_empty_and_remove_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let mut storage = FileStorage::new(&path);

        assert_eq!(storage.get_item("isLoggedIn"), None);
        storage.remove_item("isLoggedIn").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, b"{ not json").unwrap();

        let mut storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("isLoggedIn"), None);

        storage.set_item("isLoggedIn", "true").unwrap();
        assert_eq!(storage.get_item("isLoggedIn").as_deref(), Some("true"));
    }
}
