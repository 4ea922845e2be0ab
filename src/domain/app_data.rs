use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Debt, DebtStatus, Transaction};

/// The unit of persistence: both record collections, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppData {
    #[serde(rename = "expenses", alias = "transactions", default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl AppData {
    pub fn new(transactions: Vec<Transaction>, debts: Vec<Debt>) -> Self {
        Self {
            transactions,
            debts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.debts.is_empty()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == id)
    }

    /// Prepends the transaction and returns its identifier.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    /// Replaces the transaction sharing `replacement.id` without moving it.
    pub fn replace_transaction(&mut self, replacement: Transaction) -> bool {
        match self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == replacement.id)
        {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Prepends the debt and returns its identifier.
    pub fn add_debt(&mut self, debt: Debt) -> Uuid {
        let id = debt.id;
        self.debts.insert(0, debt);
        id
    }

    /// Replaces the debt sharing `replacement.id` in place. The stored status
    /// always wins over the replacement's; only a toggle changes status.
    pub fn replace_debt(&mut self, mut replacement: Debt) -> bool {
        match self.debts.iter_mut().find(|debt| debt.id == replacement.id) {
            Some(slot) => {
                replacement.status = slot.status;
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    pub fn remove_debt(&mut self, id: Uuid) -> Option<Debt> {
        let index = self.debts.iter().position(|debt| debt.id == id)?;
        Some(self.debts.remove(index))
    }

    pub fn toggle_debt_status(&mut self, id: Uuid) -> Option<DebtStatus> {
        self.debts
            .iter_mut()
            .find(|debt| debt.id == id)
            .map(Debt::toggle_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DebtDirection, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(description: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description,
            dec!(10),
            "Misc",
            TransactionKind::Expense,
        )
    }

    #[test]
    fn new_records_are_prepended() {
        let mut data = AppData::default();
        data.add_transaction(txn("first"));
        data.add_transaction(txn("second"));
        let order: Vec<_> = data
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, ["second", "first"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut data = AppData::default();
        let a = data.add_transaction(txn("a"));
        data.add_transaction(txn("b"));
        let mut edited = data.transaction(a).cloned().unwrap();
        edited.description = "a2".into();
        assert!(data.replace_transaction(edited));
        assert_eq!(data.transactions[1].description, "a2");
        assert_eq!(data.transactions[1].id, a);
    }

    #[test]
    fn replace_debt_preserves_status() {
        let mut data = AppData::default();
        let id = data.add_debt(Debt::new("Kiran", dec!(300), DebtDirection::TheyOweMe));
        data.toggle_debt_status(id);

        let mut edited = data.debt(id).cloned().unwrap();
        edited.person = "Kiran S".into();
        edited.status = DebtStatus::Pending;
        assert!(data.replace_debt(edited));

        let stored = data.debt(id).unwrap();
        assert_eq!(stored.person, "Kiran S");
        assert_eq!(stored.status, DebtStatus::Settled);
    }

    #[test]
    fn deserializes_legacy_and_alias_keys() {
        let legacy: AppData = serde_json::from_str(r#"{"expenses":[],"debts":[]}"#).unwrap();
        assert!(legacy.is_empty());
        let alias: AppData = serde_json::from_str(r#"{"transactions":[]}"#).unwrap();
        assert!(alias.is_empty());
        let value = serde_json::to_value(AppData::default()).unwrap();
        assert!(value.get("expenses").is_some());
    }
}
