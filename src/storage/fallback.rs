use crate::errors::StorageResult;

use super::{KeyValueStore, MemoryStore};

/// Wraps an optional primary store with an in-memory shadow map.
///
/// Writes go to the primary first. Whatever it fails to absorb lands in the
/// shadow map, so `get`/`set`/`remove` never fail. A write the primary
/// accepted clears the shadow entry for that key; reads check the shadow
/// first, so a value written during an outage is not masked by an older
/// one once the primary recovers.
pub struct FallbackStore<S> {
    primary: Option<S>,
    shadow: MemoryStore,
}

impl<S: KeyValueStore> FallbackStore<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary: Some(primary),
            shadow: MemoryStore::new(),
        }
    }

    /// Store with no primary backend; everything stays in memory.
    pub fn memory_only() -> Self {
        Self {
            primary: None,
            shadow: MemoryStore::new(),
        }
    }

    pub fn primary(&self) -> Option<&S> {
        self.primary.as_ref()
    }

    /// A shadow entry only exists while the primary missed the latest
    /// write for `key`, so it wins over the primary's value.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.shadow.get(key).ok().flatten() {
            return Some(value);
        }
        let primary = self.primary.as_ref()?;
        match primary.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "store read failed, nothing kept in memory");
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        if let Some(primary) = &self.primary {
            match primary.set(key, value) {
                Ok(()) => {
                    let _ = self.shadow.remove(key);
                    return;
                }
                Err(err) => tracing::warn!(key, error = %err, "store write failed, keeping value in memory"),
            }
        }
        let _ = self.shadow.set(key, value);
    }

    pub fn remove(&self, key: &str) {
        if let Some(primary) = &self.primary {
            if let Err(err) = primary.remove(key) {
                tracing::warn!(key, error = %err, "store remove failed");
            }
        }
        let _ = self.shadow.remove(key);
    }
}

impl<S: KeyValueStore> KeyValueStore for FallbackStore<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(FallbackStore::get(self, key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        FallbackStore::set(self, key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        FallbackStore::remove(self, key);
        Ok(())
    }
}
