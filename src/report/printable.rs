use std::fmt::Write as _;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::{fixed_2dp, plain_amount};
use crate::domain::{Debt, DebtDirection, Transaction};
use crate::ledger::{self, pending_debts};

/// Print-ready snapshot of the ledger.
#[derive(Debug, Clone)]
pub struct PrintableReport<'a> {
    pub generated_on: NaiveDate,
    pub currency_symbol: String,
    pub balance: Decimal,
    pub total_expense: Decimal,
    pub transactions: &'a [Transaction],
    pub outstanding: Vec<&'a Debt>,
}

impl<'a> PrintableReport<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        debts: &'a [Debt],
        generated_on: NaiveDate,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            generated_on,
            currency_symbol: currency_symbol.into(),
            balance: ledger::balance(transactions),
            total_expense: ledger::total_expense(transactions),
            transactions,
            outstanding: pending_debts(debts),
        }
    }

    pub fn balance_label(&self) -> String {
        format!("{}{}", self.currency_symbol, fixed_2dp(self.balance))
    }

    pub fn expense_label(&self) -> String {
        format!("{}{}", self.currency_symbol, fixed_2dp(self.total_expense))
    }

    pub fn render(&self) -> String {
        let symbol = &self.currency_symbol;
        let mut out = String::new();
        let _ = writeln!(out, "Financial Report");
        let _ = writeln!(
            out,
            "Generated on {}",
            self.generated_on.format("%d/%m/%Y")
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Summary");
        let _ = writeln!(out, "  Total Balance: {}", self.balance_label());
        let _ = writeln!(out, "  Monthly Expenses: {}", self.expense_label());
        let _ = writeln!(out);

        let _ = writeln!(out, "Transactions");
        let _ = writeln!(out, "  {:<12} {:<32} {:>14}", "Date", "Description", "Amount");
        if self.transactions.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for txn in self.transactions {
            let _ = writeln!(
                out,
                "  {:<12} {:<32} {:>14}",
                txn.date.format("%Y-%m-%d"),
                txn.description,
                format!("{symbol}{}", plain_amount(txn.amount))
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Outstanding Debts");
        let _ = writeln!(out, "  {:<24} {:<10} {:>14}", "Person", "Type", "Amount");
        if self.outstanding.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for debt in &self.outstanding {
            let _ = writeln!(
                out,
                "  {:<24} {:<10} {:>14}",
                debt.person,
                direction_label(debt.direction),
                format!("{symbol}{}", plain_amount(debt.amount))
            );
        }
        out
    }
}

fn direction_label(direction: DebtDirection) -> &'static str {
    match direction {
        DebtDirection::TheyOweMe => "Owes Me",
        DebtDirection::IOweThem => "I Owe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use rust_decimal_macros::dec;

    #[test]
    fn summarises_balance_and_pending_debts_only() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let transactions = vec![
            Transaction::new(date, "Salary", dec!(1000), "Salary", TransactionKind::Income),
            Transaction::new(date, "Rent", dec!(300), "Housing", TransactionKind::Expense),
        ];
        let mut settled = Debt::new("Ravi", dec!(40), DebtDirection::IOweThem);
        settled.toggle_status();
        let debts = vec![Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe), settled];

        let report = PrintableReport::new(&transactions, &debts, date, "₹");
        assert_eq!(report.balance_label(), "₹700.00");
        assert_eq!(report.expense_label(), "₹300.00");
        assert_eq!(report.outstanding.len(), 1);

        let text = report.render();
        assert!(text.contains("Generated on 05/03/2024"));
        assert!(text.contains("Asha"));
        assert!(text.contains("Owes Me"));
        assert!(!text.contains("Ravi"));
        assert!(text.contains("Rent"));
    }
}
