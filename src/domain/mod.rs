//! Record model: transactions, debts and the persisted [`AppData`] pair.

pub mod app_data;
pub mod common;
pub mod debt;
pub mod transaction;

pub use app_data::AppData;
pub use common::{Displayable, Identifiable};
pub use debt::{Debt, DebtDirection, DebtStatus};
pub use transaction::{Transaction, TransactionKind};
