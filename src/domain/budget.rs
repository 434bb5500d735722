use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Weekly spending ceiling used when nothing else is configured.
pub const DEFAULT_WEEKLY_BUDGET: f64 = 3500.0;

/// Positive, finite weekly spending ceiling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    /// Returns `None` unless `amount` is finite and strictly positive.
    pub fn new(amount: f64) -> Option<Self> {
        (amount.is_finite() && amount > 0.0).then_some(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(DEFAULT_WEEKLY_BUDGET)
    }
}

/// Spending measured against the budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetProjection {
    /// Fraction of the budget used, clamped to `[0, 1]` for progress bars.
    pub ratio: f64,
    /// Signed; negative once the budget is exceeded.
    pub remaining: f64,
    pub is_exceeded: bool,
}

impl BudgetProjection {
    /// Whole-number percentage for the "N% utilizado" label.
    pub fn percent_used(&self) -> u32 {
        (self.ratio * 100.0).round() as u32
    }

    /// Magnitude shown next to "Restante" or "Excedido em".
    pub fn amount_label_value(&self) -> f64 {
        self.remaining.abs()
    }

    pub fn status(&self) -> BudgetStatus {
        if self.is_exceeded {
            return BudgetStatus::OverBudget;
        }
        match self.remaining.partial_cmp(&0.0).unwrap_or(Ordering::Equal) {
            Ordering::Greater => BudgetStatus::UnderBudget,
            _ => BudgetStatus::OnTrack,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    UnderBudget,
    OnTrack,
    OverBudget,
}
