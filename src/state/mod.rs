//! Application state and its pure update functions.
//!
//! Every `apply_*` method returns a new snapshot and leaves `self` untouched.

pub mod auth;

use serde::Serialize;

use crate::domain::{Budget, Expense, ExpenseDraft, ExpenseId};
use crate::services::{ExpenseService, ServiceError, ServiceResult};
use crate::storage::PersistedState;

pub use auth::{validate_credentials, CredentialIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Login,
    Dashboard,
    /// Add-expense form.
    History,
    ExpenseList,
    Stats,
    Settings,
}

impl Screen {
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Screen::Dashboard
                | Screen::History
                | Screen::ExpenseList
                | Screen::Stats
                | Screen::Settings
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub is_authenticated: bool,
    pub is_dark_mode: bool,
    pub budget: Budget,
    pub expenses: Vec<Expense>,
    pub screen: Screen,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_budget(Budget::default())
    }
}

impl AppState {
    /// Fresh state: signed out, light theme, no expenses.
    pub fn with_budget(budget: Budget) -> Self {
        Self {
            is_authenticated: false,
            is_dark_mode: false,
            budget,
            expenses: Vec::new(),
            screen: Screen::Welcome,
        }
    }

    /// Overlays whatever was persisted onto the defaults.
    pub fn restore(persisted: PersistedState, default_budget: Budget) -> Self {
        let defaults = Self::with_budget(default_budget);
        Self {
            is_authenticated: persisted
                .is_authenticated
                .unwrap_or(defaults.is_authenticated),
            is_dark_mode: persisted.is_dark_mode.unwrap_or(defaults.is_dark_mode),
            budget: persisted.budget.unwrap_or(defaults.budget),
            expenses: persisted.expenses.unwrap_or(defaults.expenses),
            screen: defaults.screen,
        }
    }

    pub fn apply_add_expense(&self, draft: ExpenseDraft) -> ServiceResult<Self> {
        let expenses = ExpenseService::add(&self.expenses, draft)?;
        Ok(Self {
            expenses,
            ..self.clone()
        })
    }

    pub fn apply_delete_expense(&self, id: ExpenseId) -> Self {
        Self {
            expenses: ExpenseService::delete(&self.expenses, id),
            ..self.clone()
        }
    }

    pub fn apply_set_budget(&self, amount: f64) -> ServiceResult<Self> {
        let budget = Budget::new(amount).ok_or_else(|| {
            ServiceError::Invalid(format!("Budget must be a positive number, got {amount}"))
        })?;
        Ok(Self {
            budget,
            ..self.clone()
        })
    }

    pub fn apply_toggle_theme(&self) -> Self {
        Self {
            is_dark_mode: !self.is_dark_mode,
            ..self.clone()
        }
    }

    pub fn apply_login(&self) -> Self {
        Self {
            is_authenticated: true,
            screen: Screen::Dashboard,
            ..self.clone()
        }
    }

    /// Signs out; expenses and budget are kept.
    pub fn apply_logout(&self) -> Self {
        Self {
            is_authenticated: false,
            screen: Screen::Welcome,
            ..self.clone()
        }
    }

    /// Moves to `screen`, redirecting to the login screen when it needs an
    /// authenticated session.
    pub fn apply_navigate(&self, screen: Screen) -> Self {
        let screen = if screen.requires_auth() && !self.is_authenticated {
            Screen::Login
        } else {
            screen
        };
        Self {
            screen,
            ..self.clone()
        }
    }
}
