pub mod budget_service;
pub mod expense_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Invalid(String),
}
