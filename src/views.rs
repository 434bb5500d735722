//! Render-ready data for the dashboard, statistics and history screens.
//!
//! Views are rebuilt from the expense list and budget on every read.

use serde::Serialize;

use crate::currency::format_amount_with;
use crate::domain::{
    Budget, BudgetProjection, CategoryAggregate, Displayable, Expense, ExpenseId, Identifiable,
    NamedEntity, Summary,
};
use crate::services::{BudgetService, ExpenseService, SummaryService};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub total_spent: f64,
    pub budget: f64,
    pub projection: BudgetProjection,
    /// Pie-chart entries; a single `Vazio` slice when nothing was spent.
    pub slices: Vec<CategoryAggregate>,
    pub chart_color: String,
    /// Legend rows, real categories only.
    pub legend: Vec<CategoryAggregate>,
}

impl DashboardView {
    pub fn build(expenses: &[Expense], budget: Budget) -> Self {
        let summary = SummaryService::current(expenses);
        Self::from_summary(&summary, budget)
    }

    pub fn from_summary(summary: &Summary, budget: Budget) -> Self {
        let total_spent = summary.total_spent();
        Self {
            total_spent,
            budget: budget.amount(),
            projection: BudgetService::project_budget(total_spent, budget.amount()),
            slices: summary.entries(),
            chart_color: summary.chart_color().to_string(),
            legend: summary.aggregates().to_vec(),
        }
    }

    pub fn has_spending(&self) -> bool {
        self.total_spent > 0.0
    }
}

/// One bar in the statistics screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryBar {
    pub aggregate: CategoryAggregate,
    /// Bar width as a share of total spend.
    pub width_percent: u32,
    /// Category value as a share of the budget; may exceed 100.
    pub percent_of_budget: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopCategory {
    pub aggregate: CategoryAggregate,
    pub percent_of_budget: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsView {
    pub total_spent: f64,
    pub budget: f64,
    pub projection: BudgetProjection,
    pub top_category: Option<TopCategory>,
    pub bars: Vec<CategoryBar>,
}

impl StatsView {
    pub fn build(expenses: &[Expense], budget: Budget) -> Self {
        let summary = SummaryService::current(expenses);
        Self::from_summary(&summary, budget)
    }

    pub fn from_summary(summary: &Summary, budget: Budget) -> Self {
        let total_spent = summary.total_spent();
        let impact = |aggregate: &CategoryAggregate| {
            BudgetService::project_category_impact(aggregate.value, budget.amount())
        };
        let bars = summary
            .aggregates()
            .iter()
            .map(|aggregate| CategoryBar {
                aggregate: aggregate.clone(),
                width_percent: aggregate.percentage,
                percent_of_budget: impact(aggregate),
            })
            .collect();
        let top_category = summary.dominant().map(|aggregate| TopCategory {
            aggregate: aggregate.clone(),
            percent_of_budget: impact(aggregate),
        });
        Self {
            total_spent,
            budget: budget.amount(),
            projection: BudgetService::project_budget(total_spent, budget.amount()),
            top_category,
            bars,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryView {
    /// Newest first.
    pub expenses: Vec<Expense>,
}

impl HistoryView {
    pub fn build(expenses: &[Expense]) -> Self {
        Self {
            expenses: ExpenseService::history_order(expenses)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// One formatted row per expense, in history order, amounts prefixed
    /// with `currency_symbol`.
    pub fn rows(&self, currency_symbol: &str) -> Vec<HistoryRow> {
        self.expenses
            .iter()
            .map(|expense| HistoryRow::from_expense(expense, currency_symbol))
            .collect()
    }
}

/// An expense as the history list shows it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryRow {
    pub id: ExpenseId,
    pub title: String,
    /// `Categoria | dd/mm/yyyy`.
    pub subtitle: String,
    pub amount: String,
    /// `None` for labels outside the category table.
    pub color: Option<&'static str>,
}

impl HistoryRow {
    pub fn from_expense(expense: &Expense, currency_symbol: &str) -> Self {
        Self {
            id: expense.id(),
            title: expense.name().to_string(),
            subtitle: expense.display_label(),
            amount: format_amount_with(expense.value, currency_symbol),
            color: expense.color(),
        }
    }
}
