mod common;

use common::{draft, expense, UnavailableStore};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use weekly_budget::{
    config::{Config, ConfigManager},
    domain::Category,
    errors::StorageError,
    storage::{
        load_app_state, persist_expenses, FallbackStore, JsonFileStore, KeyValueStore,
        StorageKeys,
    },
    utils::persistence::write_atomic,
    BudgetApp,
};

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn unavailable_storage_falls_back_to_memory() {
    let mut app = BudgetApp::open(UnavailableStore, &Config::default());
    assert_eq!(app.budget().amount(), 3500.0);
    assert!(app.state().expenses.is_empty());

    app.add_expense(draft("Lunch", 25.5, Category::Food)).unwrap();
    app.toggle_theme();
    app.set_budget(900.0).unwrap();

    assert_eq!(app.state().expenses.len(), 1);
    let persisted = load_app_state(app.store());
    assert_eq!(persisted.is_dark_mode, Some(true));
    assert_eq!(persisted.budget.map(|b| b.amount()), Some(900.0));
    assert_eq!(persisted.expenses.map(|list| list.len()), Some(1));
}

#[test]
fn corrupt_store_file_is_reported_by_backend_but_not_by_fallback() {
    let temp = tempdir().unwrap();
    let store = JsonFileStore::in_dir(temp.path());
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(
        store.get(StorageKeys::EXPENSES),
        Err(StorageError::Serde(_))
    ));

    let fallback = FallbackStore::new(store);
    assert_eq!(fallback.get(StorageKeys::EXPENSES), None);
    let state = load_app_state(&fallback);
    assert_eq!(state.expenses, None);
    assert_eq!(state.budget, None);
}

#[test]
fn malformed_persisted_values_fall_back_to_defaults() {
    let temp = tempdir().unwrap();
    let store = JsonFileStore::in_dir(temp.path());
    store.set(StorageKeys::BUDGET, "abc").unwrap();
    store.set(StorageKeys::EXPENSES, "{\"oops\": true}").unwrap();
    store.set(StorageKeys::THEME, "").unwrap();

    let app = BudgetApp::open(store, &Config::default());
    assert_eq!(app.budget().amount(), 3500.0);
    assert!(app.state().expenses.is_empty());
    assert!(!app.state().is_dark_mode);
}

#[test]
fn lenient_values_in_persisted_expenses_are_skipped_by_summary() {
    let temp = tempdir().unwrap();
    let store = JsonFileStore::in_dir(temp.path());
    store
        .set(
            StorageKeys::EXPENSES,
            r#"[
                {"id": 1, "name": "Lunch", "value": "12.5", "category": "Alimentação", "date": "01/07/2025"},
                {"id": 2, "name": "Broken", "value": "abc", "category": "Lazer", "date": "01/07/2025"},
                {"id": 3, "name": "Gift", "value": 87.5, "category": "Presentes", "date": "02/07/2025"}
            ]"#,
        )
        .unwrap();

    let app = BudgetApp::open(store, &Config::default());
    assert_eq!(app.state().expenses.len(), 3);
    assert!(app.state().expenses[1].value.is_nan());

    let summary = app.summary();
    assert_eq!(summary.total_spent(), 100.0);
    assert_eq!(summary.aggregate_for(Category::Food).unwrap().percentage, 13);
    assert_eq!(summary.aggregate_for(Category::Other).unwrap().percentage, 88);
    assert!(summary.aggregate_for(Category::Leisure).is_none());
}

#[test]
fn record_with_null_category_keeps_its_neighbours_across_writes() {
    let temp = tempdir().unwrap();
    let store = JsonFileStore::in_dir(temp.path());
    store
        .set(
            StorageKeys::EXPENSES,
            r#"[
                {"id": 1, "name": "Lunch", "value": 20, "category": "Alimentação", "date": "01/07/2025"},
                {"id": 2, "name": "Mystery", "value": 10, "category": null, "date": "01/07/2025"}
            ]"#,
        )
        .unwrap();

    let mut app = BudgetApp::open(store, &Config::default());
    assert_eq!(app.state().expenses.len(), 2);
    let summary = app.summary();
    assert_eq!(summary.total_spent(), 30.0);
    assert_eq!(summary.aggregate_for(Category::Other).unwrap().value, 10.0);

    app.add_expense(draft("Bus", 4.5, Category::Transport)).unwrap();
    drop(app);

    let reopened = BudgetApp::open(JsonFileStore::in_dir(temp.path()), &Config::default());
    let names: Vec<_> = reopened
        .state()
        .expenses
        .iter()
        .map(|expense| expense.name.as_str())
        .collect();
    assert_eq!(names, vec!["Lunch", "Mystery", "Bus"]);
}

#[test]
fn expenses_round_trip_through_the_file_store() {
    let temp = tempdir().unwrap();
    let fallback = FallbackStore::new(JsonFileStore::in_dir(temp.path()));
    let expenses = vec![expense(10, 19.9, "Transporte"), expense(11, 5.0, "Vazio")];
    persist_expenses(&fallback, &expenses);

    let reopened = FallbackStore::new(JsonFileStore::in_dir(temp.path()));
    assert_eq!(load_app_state(&reopened).expenses, Some(expenses));
}

#[test]
fn atomic_write_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("store.json");
    write_atomic(&path, "{\"app.theme\":\"dark\"}").expect("initial write");

    // A directory at the temp path makes File::create fail.
    fs::create_dir_all(tmp_path_for(&path)).unwrap();
    assert!(write_atomic(&path, "{}").is_err());

    let current = fs::read_to_string(&path).unwrap();
    assert_eq!(current, "{\"app.theme\":\"dark\"}");
}

#[test]
fn config_round_trips_and_seeds_the_budget() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path()).unwrap();
    assert_eq!(manager.load().unwrap(), Config::default());

    let config = Config {
        default_budget: 1250.0,
        data_dir: Some(temp.path().join("data")),
        ..Config::default()
    };
    manager.save(&config).unwrap();
    let loaded = manager.load().unwrap();
    assert_eq!(loaded, config);

    let app = BudgetApp::in_memory(&loaded);
    assert_eq!(app.budget().amount(), 1250.0);
}
