pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod summary;

pub use budget::{Budget, BudgetProjection, BudgetStatus, DEFAULT_WEEKLY_BUDGET};
pub use category::{Category, CategoryMeta};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::{Expense, ExpenseDraft, ExpenseId};
pub use summary::{CategoryAggregate, Summary};
