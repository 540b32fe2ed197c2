//! The browser-local key/value store, rebuilt on files.
//!
//! One file per key under the portal config directory. JSON keys go
//! through [`AtomicJsonFile`]; the credential key is a plain string file.
//! Reads follow `localStorage` semantics: a value that cannot be parsed
//! behaves exactly like a missing one.

use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::paths::PortalPaths;
use crate::storage::atomic_json::{AtomicJsonFile, FileLock, StorageError, atomic_write};

/// File-backed key/value store with `localStorage` read semantics.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store at the platform config directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = PortalPaths::config_dir().map_err(|e| {
            StorageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))
        })?;
        Ok(Self { dir })
    }

    /// Opens the store at a custom directory (used by tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Reads a JSON value. Missing, empty and malformed files all read as
    /// `None`; malformed content is logged and left in place.
    pub fn get<T: DeserializeOwned + Serialize>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let file = AtomicJsonFile::<T>::new(self.path_for(key));
        match file.load() {
            Ok(value) => Ok(value),
            Err(StorageError::JsonError(e)) => {
                warn!(key, error = %e, "persisted value is malformed, treating as absent");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Writes a JSON value atomically.
    pub fn set<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        AtomicJsonFile::<T>::new(self.path_for(key)).save(value)
    }

    /// Removes a key; absent keys are fine.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        AtomicJsonFile::<serde_json::Value>::new(self.path_for(key)).remove()
    }

    /// Reads a plain-string value (not JSON encoded).
    pub fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        if content.is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    /// Writes a plain-string value atomically.
    pub fn set_string(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let _lock = FileLock::acquire(&path)?;
        atomic_write(&path, value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        value: String,
    }

    #[test]
    fn test_json_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::with_dir(temp_dir.path().to_path_buf());

        let entry = Entry {
            value: "hello".into(),
        };
        store.set("entry", &entry).unwrap();
        assert_eq!(store.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_malformed_value_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::with_dir(temp_dir.path().to_path_buf());
        std::fs::write(temp_dir.path().join("entry"), "{ broken").unwrap();

        assert_eq!(store.get::<Entry>("entry").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::with_dir(temp_dir.path().to_path_buf());
        store.remove("nothing-here").unwrap();
    }

    #[test]
    fn test_plain_string_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(store.get_string("credential").unwrap(), None);
        store.set_string("credential", "AIza-test-key").unwrap();
        assert_eq!(
            store.get_string("credential").unwrap(),
            Some("AIza-test-key".to_string())
        );

        // Plain string means no JSON quoting on disk.
        let raw = std::fs::read_to_string(temp_dir.path().join("credential")).unwrap();
        assert_eq!(raw, "AIza-test-key");
    }
}
