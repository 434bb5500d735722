#![allow(dead_code)]

use weekly_budget::{
    domain::{Category, Expense, ExpenseDraft, ExpenseId},
    errors::{StorageError, StorageResult},
    storage::KeyValueStore,
};

/// Store whose every operation fails, standing in for an unavailable device store.
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("device storage missing".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("device storage missing".into()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("device storage missing".into()))
    }
}

pub fn draft(name: &str, value: f64, category: Category) -> ExpenseDraft {
    ExpenseDraft::new(name, value, category).with_date("14/07/2025")
}

pub fn expense(id: i64, value: f64, label: &str) -> Expense {
    Expense {
        id: ExpenseId(id),
        name: format!("expense {id}"),
        value,
        category: label.to_string(),
        date: "14/07/2025".into(),
    }
}

/// Deterministic pseudo-random expense lists for property-style checks.
pub fn generated_lists() -> Vec<Vec<Expense>> {
    let labels = [
        "Alimentação",
        "Transporte",
        "Lazer",
        "Moradia",
        "Outros",
        "Unknown",
        "Vazio",
    ];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    (0..60)
        .map(|list_idx| {
            let len = (next() % 12) as usize + list_idx % 2;
            (0..len)
                .map(|idx| {
                    let cents = (next() % 500_000) as f64 + 1.0;
                    let label = labels[(next() % labels.len() as u64) as usize];
                    expense(idx as i64 + 1, cents / 100.0, label)
                })
                .collect()
        })
        .collect()
}
