pub mod debt_service;
pub mod summary_service;
pub mod transaction_service;

pub use debt_service::DebtService;
pub use summary_service::{DashboardSummary, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::FinTrackError;

pub type ServiceResult<T> = Result<T, FinTrackError>;
