use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    errors::{StorageError, StorageResult},
    utils::persistence::{read_optional, write_atomic},
};

use super::KeyValueStore;

const STORE_FILE: &str = "store.json";

/// Filesystem-backed store keeping every key in one JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    guard: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    /// Store file placed inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        match read_optional(&self.path)? {
            Some(data) if !data.trim().is_empty() => Ok(serde_json::from_str(&data)?),
            _ => Ok(BTreeMap::new()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _lock = self
            .guard
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".into()))?;
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopening() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::in_dir(dir.path());
        store.set("app.theme", "dark").unwrap();
        store.set("app.auth", "1").unwrap();
        store.remove("app.auth").unwrap();

        let reopened = JsonFileStore::in_dir(dir.path());
        assert_eq!(reopened.get("app.theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("app.auth").unwrap(), None);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::in_dir(&dir.path().join("not-yet"));
        assert_eq!(store.get("app.budget").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::in_dir(dir.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(
            store.get("app.theme"),
            Err(StorageError::Serde(_))
        ));
    }
}
