use serde::Serialize;

use crate::currency::CurrencyFormat;
use crate::domain::{AppData, Debt, Transaction};
use crate::ledger::{self, ChartPoint, LedgerTotals};

/// Dashboard figures paired with their display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub totals: LedgerTotals,
    pub balance_label: String,
    pub spend_label: String,
    pub receivable_label: String,
    pub payable_label: String,
}

pub struct SummaryService;

impl SummaryService {
    pub fn current_totals(data: &AppData) -> LedgerTotals {
        LedgerTotals::compute(&data.transactions, &data.debts)
    }

    pub fn dashboard(data: &AppData, format: &CurrencyFormat) -> DashboardSummary {
        let totals = Self::current_totals(data);
        DashboardSummary {
            balance_label: format.format(totals.balance),
            spend_label: format.format(totals.total_expense),
            receivable_label: format.format(totals.total_receivable),
            payable_label: format.format(totals.total_payable),
            totals,
        }
    }

    pub fn overview_chart(transactions: &[Transaction]) -> Vec<ChartPoint> {
        ledger::overview_series(transactions)
    }

    pub fn pending_debts(debts: &[Debt]) -> Vec<&Debt> {
        ledger::pending_debts(debts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DebtDirection, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn dashboard_labels_follow_totals() {
        let mut data = AppData::default();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        data.add_transaction(Transaction::new(
            date,
            "Salary",
            dec!(150000),
            "Salary",
            TransactionKind::Income,
        ));
        data.add_transaction(Transaction::new(
            date,
            "Rent",
            dec!(25000),
            "Rent",
            TransactionKind::Expense,
        ));
        data.add_debt(Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe));

        let summary = SummaryService::dashboard(&data, &CurrencyFormat::default());
        assert_eq!(summary.totals.balance, dec!(125000));
        assert_eq!(summary.balance_label, "₹1,25,000.00");
        assert_eq!(summary.spend_label, "₹25,000.00");
        assert_eq!(summary.receivable_label, "₹500.00");
        assert_eq!(summary.payable_label, "₹0.00");
    }
}
