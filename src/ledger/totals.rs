use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Debt, DebtDirection, Transaction, TransactionKind};

// Stored blobs may be edited by hand, so sums saturate at the Decimal range
// instead of panicking.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    saturating_sum(
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount),
    )
}

fn sum_pending(debts: &[Debt], direction: DebtDirection) -> Decimal {
    saturating_sum(
        debts
            .iter()
            .filter(|debt| debt.direction == direction && debt.is_pending())
            .map(|debt| debt.amount),
    )
}

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    sum_kind(transactions, TransactionKind::Income)
}

pub fn total_expense(transactions: &[Transaction]) -> Decimal {
    sum_kind(transactions, TransactionKind::Expense)
}

/// Income minus expense; negative when spending exceeds income.
pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_income(transactions).saturating_sub(total_expense(transactions))
}

/// Pending amounts other people owe the user.
pub fn total_receivable(debts: &[Debt]) -> Decimal {
    sum_pending(debts, DebtDirection::TheyOweMe)
}

/// Pending amounts the user owes other people.
pub fn total_payable(debts: &[Debt]) -> Decimal {
    sum_pending(debts, DebtDirection::IOweThem)
}

/// Debts still outstanding, in collection order.
pub fn pending_debts(debts: &[Debt]) -> Vec<&Debt> {
    debts.iter().filter(|debt| debt.is_pending()).collect()
}

/// The five dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub total_receivable: Decimal,
    pub total_payable: Decimal,
}

impl LedgerTotals {
    pub fn compute(transactions: &[Transaction], debts: &[Debt]) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        Self {
            total_income,
            total_expense,
            balance: total_income.saturating_sub(total_expense),
            total_receivable: total_receivable(debts),
            total_payable: total_payable(debts),
        }
    }
}

/// One bar group of the income/expense overview chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartPoint {
    #[serde(rename = "name")]
    pub name: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Series rendered by the dashboard chart: a single `Summary` group.
pub fn overview_series(transactions: &[Transaction]) -> Vec<ChartPoint> {
    vec![ChartPoint {
        name: "Summary".into(),
        income: total_income(transactions),
        expense: total_expense(transactions),
    }]
}
