//! Reading and writing the persisted slices of application state.

use crate::domain::{Budget, Expense};

use super::{FallbackStore, KeyValueStore, StorageKeys};

const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";
const AUTH_ON: &str = "1";
const AUTH_OFF: &str = "0";

/// Persisted values, `None` where nothing usable was stored so the caller
/// can apply defaults only on true absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub is_dark_mode: Option<bool>,
    pub budget: Option<Budget>,
    pub expenses: Option<Vec<Expense>>,
    pub is_authenticated: Option<bool>,
}

pub fn load_app_state<S: KeyValueStore>(store: &FallbackStore<S>) -> PersistedState {
    PersistedState {
        is_dark_mode: read(store, StorageKeys::THEME).map(|raw| raw == THEME_DARK),
        budget: read(store, StorageKeys::BUDGET).and_then(|raw| parse_budget(&raw)),
        expenses: read(store, StorageKeys::EXPENSES).and_then(|raw| parse_expenses(&raw)),
        is_authenticated: read(store, StorageKeys::AUTH).map(|raw| raw == AUTH_ON),
    }
}

pub fn persist_theme<S: KeyValueStore>(store: &FallbackStore<S>, is_dark_mode: bool) {
    let value = if is_dark_mode { THEME_DARK } else { THEME_LIGHT };
    store.set(StorageKeys::THEME, value);
}

pub fn persist_budget<S: KeyValueStore>(store: &FallbackStore<S>, budget: Budget) {
    store.set(StorageKeys::BUDGET, &budget.amount().to_string());
}

pub fn persist_expenses<S: KeyValueStore>(store: &FallbackStore<S>, expenses: &[Expense]) {
    match serde_json::to_string(expenses) {
        Ok(json) => store.set(StorageKeys::EXPENSES, &json),
        Err(err) => tracing::warn!(error = %err, "could not serialise expenses"),
    }
}

pub fn persist_auth<S: KeyValueStore>(store: &FallbackStore<S>, is_authenticated: bool) {
    let value = if is_authenticated { AUTH_ON } else { AUTH_OFF };
    store.set(StorageKeys::AUTH, value);
}

pub fn clear_all<S: KeyValueStore>(store: &FallbackStore<S>) {
    for key in StorageKeys::ALL {
        store.remove(key);
    }
}

// Empty strings count as unset.
fn read<S: KeyValueStore>(store: &FallbackStore<S>, key: &str) -> Option<String> {
    store.get(key).filter(|raw| !raw.is_empty())
}

fn parse_budget(raw: &str) -> Option<Budget> {
    let parsed = raw.trim().parse::<f64>().ok().and_then(Budget::new);
    if parsed.is_none() {
        tracing::warn!(raw, "ignoring unusable persisted budget");
    }
    parsed
}

/// Reads the stored array one record at a time. A record that cannot be
/// read is dropped on its own; only a value that is not an array counts as
/// absent.
fn parse_expenses(raw: &str) -> Option<Vec<Expense>> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable persisted expenses");
            return None;
        }
    };
    let expenses = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Expense>(record) {
            Ok(expense) => Some(expense),
            Err(err) => {
                tracing::warn!(index, error = %err, "dropping unreadable persisted expense");
                None
            }
        })
        .collect();
    Some(expenses)
}
