use std::fmt::Write as _;

use crate::currency::plain_amount;
use crate::domain::{Debt, Transaction};
use crate::ledger::pending_debts;

pub const DEFAULT_TRANSACTION_LIMIT: usize = 50;

/// Renders the records handed to the text generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    currency_symbol: String,
    transaction_limit: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new("₹", DEFAULT_TRANSACTION_LIMIT)
    }
}

impl PromptBuilder {
    /// `transaction_limit` may lower the cap but never raise it above
    /// [`DEFAULT_TRANSACTION_LIMIT`].
    pub fn new(currency_symbol: impl Into<String>, transaction_limit: usize) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            transaction_limit: transaction_limit.min(DEFAULT_TRANSACTION_LIMIT),
        }
    }

    pub fn transaction_limit(&self) -> usize {
        self.transaction_limit
    }

    /// One line per transaction, first `transaction_limit` in collection order.
    pub fn transaction_lines(&self, transactions: &[Transaction]) -> Vec<String> {
        transactions
            .iter()
            .take(self.transaction_limit)
            .map(|txn| {
                format!(
                    "{}: {} - {} ({}{}) [{}]",
                    txn.date.format("%Y-%m-%d"),
                    txn.kind,
                    txn.description,
                    self.currency_symbol,
                    plain_amount(txn.amount),
                    txn.category
                )
            })
            .collect()
    }

    /// One line per pending debt; settled debts are left out.
    pub fn debt_lines(&self, debts: &[Debt]) -> Vec<String> {
        pending_debts(debts)
            .into_iter()
            .map(|debt| {
                format!(
                    "{}: {}{} involved with {}",
                    debt.direction,
                    self.currency_symbol,
                    plain_amount(debt.amount),
                    debt.person
                )
            })
            .collect()
    }

    pub fn build(&self, transactions: &[Transaction], debts: &[Debt]) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "Analyze the following financial data snippet (Currency: Indian Rupees {}).",
            self.currency_symbol
        );
        let _ = writeln!(prompt);
        let _ = writeln!(
            prompt,
            "Expenses/Income (Last {}):",
            self.transaction_limit
        );
        for line in self.transaction_lines(transactions) {
            let _ = writeln!(prompt, "{line}");
        }
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Active Debts:");
        for line in self.debt_lines(debts) {
            let _ = writeln!(prompt, "{line}");
        }
        let _ = writeln!(prompt);
        let _ = writeln!(
            prompt,
            "Please provide 3 brief, actionable bullet points of financial advice or observation based on this data."
        );
        let _ = writeln!(
            prompt,
            "Keep the tone professional yet encouraging. Focus on spending habits or debt management in the Indian context if relevant."
        );
        let _ = writeln!(prompt, "Return plain text formatted with bullet points.");
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DebtDirection, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_records_like_the_ledger_views() {
        let builder = PromptBuilder::default();
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            "Groceries",
            dec!(450.50),
            "Food",
            TransactionKind::Expense,
        );
        assert_eq!(
            builder.transaction_lines(&[txn]),
            vec!["2024-04-02: EXPENSE - Groceries (₹450.5) [Food]".to_string()]
        );

        let debt = Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe);
        assert_eq!(
            builder.debt_lines(&[debt]),
            vec!["OWES_ME: ₹500 involved with Asha".to_string()]
        );
    }

    #[test]
    fn configured_limit_cannot_exceed_default_cap() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transactions: Vec<_> = (0..120)
            .map(|i| {
                Transaction::new(
                    date,
                    format!("entry-{i}"),
                    dec!(1),
                    "General",
                    TransactionKind::Expense,
                )
            })
            .collect();

        let raised = PromptBuilder::new("₹", 500);
        assert_eq!(raised.transaction_limit(), DEFAULT_TRANSACTION_LIMIT);
        assert_eq!(raised.transaction_lines(&transactions).len(), 50);

        let lowered = PromptBuilder::new("₹", 10);
        assert_eq!(lowered.transaction_lines(&transactions).len(), 10);
    }

    #[test]
    fn caps_transactions_and_skips_settled_debts() {
        let builder = PromptBuilder::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transactions: Vec<_> = (0..80)
            .map(|i| {
                Transaction::new(
                    date,
                    format!("entry-{i}"),
                    dec!(1),
                    "General",
                    TransactionKind::Expense,
                )
            })
            .collect();
        let mut settled = Debt::new("Ravi", dec!(20), DebtDirection::IOweThem);
        settled.toggle_status();

        let lines = builder.transaction_lines(&transactions);
        assert_eq!(lines.len(), 50);
        assert!(lines[0].contains("entry-0 "));
        assert!(lines[49].contains("entry-49 "));
        assert!(builder.debt_lines(&[settled]).is_empty());

        let prompt = builder.build(&transactions, &[]);
        assert!(!prompt.contains("entry-50 "));
        assert!(prompt.contains("3 brief, actionable bullet points"));
    }
}
