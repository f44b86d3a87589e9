// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence for the selected theme.
//!
//! [`FileStorage`] keeps string pairs in `local_storage.toml` inside the
//! config directory; [`MemoryStorage`] is the non-durable equivalent.

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "local_storage.toml";

/// Client-local string storage.
pub trait PreferenceStorage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML-file-backed storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file in the application config directory.
    ///
    /// Returns `None` when no config directory can be determined.
    #[must_use]
    pub fn in_config_dir(override_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_config_dir_with_override(override_dir).map(|dir| Self::new(dir.join(STORAGE_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content)
            .map_err(|err| Error::Storage(format!("{}: {}", self.path.display(), err)))
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&entries)
            .map_err(|err| Error::Storage(err.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_storage_returns_what_was_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join(STORAGE_FILE);

        FileStorage::new(&path).set("design-system-theme", "light").unwrap();
        FileStorage::new(&path).set("other", "value").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get("design-system-theme").unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path().join(STORAGE_FILE));
        assert_eq!(storage.get("anything").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reports_storage_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "= nope").unwrap();

        match FileStorage::new(&path).get("theme") {
            Err(Error::Storage(message)) => assert!(message.contains(STORAGE_FILE)),
            other => panic!("expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn in_config_dir_uses_override() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = FileStorage::in_config_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(storage.path(), dir.path().join(STORAGE_FILE));
    }
}
