//! Key-value persistence boundary.
//!
//! Stores expose `get`/`set`/`remove` over string keys and values.
//! [`FallbackStore`] wraps any store so callers never see a failure.

pub mod app_state;
pub mod fallback;
pub mod json_backend;
pub mod memory;

use crate::errors::StorageResult;

/// Abstraction over string key-value backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Keys under which application state is persisted.
pub struct StorageKeys;

impl StorageKeys {
    pub const THEME: &'static str = "app.theme";
    pub const BUDGET: &'static str = "app.budget";
    pub const EXPENSES: &'static str = "app.expenses";
    pub const AUTH: &'static str = "app.auth";

    pub const ALL: [&'static str; 4] = [Self::THEME, Self::BUDGET, Self::EXPENSES, Self::AUTH];
}

pub use app_state::{
    clear_all, load_app_state, persist_auth, persist_budget, persist_expenses, persist_theme,
    PersistedState,
};
pub use fallback::FallbackStore;
pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
