use chrono::Utc;

use crate::domain::{expense::is_countable_amount, Expense, ExpenseDraft, ExpenseId};

use super::{ServiceError, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    /// Appends `draft` as a new expense, stamped with the current time.
    pub fn add(current: &[Expense], draft: ExpenseDraft) -> ServiceResult<Vec<Expense>> {
        Self::add_at(current, draft, Utc::now().timestamp_millis())
    }

    /// Same as [`ExpenseService::add`] with an explicit clock reading.
    pub fn add_at(
        current: &[Expense],
        draft: ExpenseDraft,
        now_millis: i64,
    ) -> ServiceResult<Vec<Expense>> {
        Self::validate(&draft)?;
        let id = Self::next_id(current, now_millis);
        let mut next = current.to_vec();
        next.push(draft.into_expense(id));
        Ok(next)
    }

    /// Removes the expense with `id`; unknown ids leave the collection as is.
    pub fn delete(current: &[Expense], id: ExpenseId) -> Vec<Expense> {
        current
            .iter()
            .filter(|expense| expense.id != id)
            .cloned()
            .collect()
    }

    /// Newest first, for history screens. Storage order is untouched.
    pub fn history_order(expenses: &[Expense]) -> Vec<&Expense> {
        expenses.iter().rev().collect()
    }

    /// The clock reading, bumped past every existing id so ids stay unique
    /// and increasing even when the clock stalls or goes backwards.
    pub fn next_id(current: &[Expense], now_millis: i64) -> ExpenseId {
        let floor = current
            .iter()
            .map(|expense| expense.id.0)
            .max()
            .map_or(i64::MIN, |last| last.saturating_add(1));
        ExpenseId(now_millis.max(floor))
    }

    fn validate(draft: &ExpenseDraft) -> ServiceResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Expense name must not be empty".into()));
        }
        if !is_countable_amount(draft.value) {
            return Err(ServiceError::Invalid(format!(
                "Expense value must be a positive number, got {}",
                draft.value
            )));
        }
        Ok(())
    }
}
