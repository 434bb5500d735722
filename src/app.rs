//! Controller owning the application state and its persisted mirror.

use crate::config::Config;
use crate::currency::format_amount_with;
use crate::domain::{Budget, BudgetProjection, ExpenseDraft, ExpenseId, Summary};
use crate::services::{BudgetService, ServiceResult, SummaryService};
use crate::state::{validate_credentials, AppState, CredentialIssue, Screen};
use crate::storage::{
    clear_all, load_app_state, persist_auth, persist_budget, persist_expenses, persist_theme,
    FallbackStore, JsonFileStore, KeyValueStore, MemoryStore,
};
use crate::views::{DashboardView, HistoryRow, HistoryView, StatsView};

/// Single owner of [`AppState`]. Each mutation swaps in a new snapshot and
/// then writes the affected keys; write failures never reach the caller.
pub struct BudgetApp<S: KeyValueStore> {
    state: AppState,
    store: FallbackStore<S>,
    default_budget: Budget,
    currency_symbol: String,
}

impl<S: KeyValueStore> BudgetApp<S> {
    /// Restores persisted state from `store`, falling back to defaults.
    pub fn open(store: S, config: &Config) -> Self {
        Self::with_store(FallbackStore::new(store), config)
    }

    pub fn with_store(store: FallbackStore<S>, config: &Config) -> Self {
        let default_budget = config.budget();
        let persisted = load_app_state(&store);
        let state = AppState::restore(persisted, default_budget);
        tracing::info!(
            expenses = state.expenses.len(),
            budget = state.budget.amount(),
            authenticated = state.is_authenticated,
            "restored application state"
        );
        Self {
            state,
            store,
            default_budget,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &FallbackStore<S> {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn budget(&self) -> Budget {
        self.state.budget
    }

    /// Recomputed on every call.
    pub fn summary(&self) -> Summary {
        SummaryService::current(&self.state.expenses)
    }

    pub fn projection(&self) -> BudgetProjection {
        BudgetService::project_budget(self.summary().total_spent(), self.state.budget.amount())
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView::build(&self.state.expenses, self.state.budget)
    }

    pub fn stats(&self) -> StatsView {
        StatsView::build(&self.state.expenses, self.state.budget)
    }

    pub fn history(&self) -> HistoryView {
        HistoryView::build(&self.state.expenses)
    }

    /// History rows with amounts in the configured currency.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history().rows(&self.currency_symbol)
    }

    /// `value` with the configured currency symbol, e.g. `R$ 30,00`.
    pub fn format_amount(&self, value: f64) -> String {
        format_amount_with(value, &self.currency_symbol)
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> ServiceResult<ExpenseId> {
        let next = self.state.apply_add_expense(draft).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected expense");
        })?;
        self.state = next;
        persist_expenses(&self.store, &self.state.expenses);
        let id = self
            .state
            .expenses
            .last()
            .map(|expense| expense.id)
            .unwrap_or(ExpenseId(0));
        tracing::info!(%id, "added expense");
        Ok(id)
    }

    pub fn delete_expense(&mut self, id: ExpenseId) {
        let before = self.state.expenses.len();
        self.state = self.state.apply_delete_expense(id);
        if self.state.expenses.len() == before {
            tracing::debug!(%id, "no expense to delete");
        } else {
            tracing::info!(%id, "deleted expense");
        }
        persist_expenses(&self.store, &self.state.expenses);
    }

    pub fn set_budget(&mut self, amount: f64) -> ServiceResult<()> {
        self.state = self.state.apply_set_budget(amount)?;
        persist_budget(&self.store, self.state.budget);
        tracing::info!(budget = amount, "updated weekly budget");
        Ok(())
    }

    pub fn toggle_theme(&mut self) {
        self.state = self.state.apply_toggle_theme();
        persist_theme(&self.store, self.state.is_dark_mode);
    }

    /// Simulated sign-in: succeeds for any well-formed credentials.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), CredentialIssue> {
        validate_credentials(email, password).inspect_err(|issue| {
            tracing::warn!(%issue, "rejected sign-in");
        })?;
        self.state = self.state.apply_login();
        persist_auth(&self.store, true);
        tracing::info!("signed in");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.state = self.state.apply_logout();
        persist_auth(&self.store, false);
        tracing::info!("signed out");
    }

    pub fn navigate(&mut self, screen: Screen) -> Screen {
        self.state = self.state.apply_navigate(screen);
        self.state.screen
    }

    /// Removes every persisted key and returns to a fresh session.
    pub fn reset(&mut self) {
        clear_all(&self.store);
        self.state = AppState::with_budget(self.default_budget);
        tracing::info!("cleared persisted state");
    }
}

impl BudgetApp<JsonFileStore> {
    /// Session backed by the store file in [`Config::resolve_data_dir`].
    pub fn open_default(config: &Config) -> Self {
        let dir = config.resolve_data_dir();
        tracing::debug!(dir = %dir.display(), "opening store directory");
        Self::open(JsonFileStore::in_dir(&dir), config)
    }
}

impl BudgetApp<MemoryStore> {
    /// Session that keeps everything in memory.
    pub fn in_memory(config: &Config) -> Self {
        Self::with_store(FallbackStore::memory_only(), config)
    }
}
