//! Ledger aggregation: derived figures computed fresh from the record
//! collections on every call. Nothing here caches or mutates.

pub mod totals;

pub use totals::{
    balance, overview_series, pending_debts, total_expense, total_income, total_payable,
    total_receivable, ChartPoint, LedgerTotals,
};
