use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppData, Debt, Transaction};
use crate::errors::Result;

#[derive(Serialize)]
struct ExportDocument<'a> {
    expenses: &'a [Transaction],
    debts: &'a [Debt],
    #[serde(rename = "exportedAt")]
    exported_at: String,
}

/// A decoded JSON export.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExportedData {
    #[serde(rename = "expenses", alias = "transactions", default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(rename = "exportedAt", default)]
    pub exported_at: Option<DateTime<Utc>>,
}

impl ExportedData {
    pub fn into_app_data(self) -> AppData {
        AppData::new(self.transactions, self.debts)
    }
}

/// Encodes both collections verbatim, stamped with the current time.
pub fn to_json(transactions: &[Transaction], debts: &[Debt]) -> Result<String> {
    to_json_at(transactions, debts, Utc::now())
}

/// Same as [`to_json`] with an explicit capture time.
pub fn to_json_at(
    transactions: &[Transaction],
    debts: &[Debt],
    exported_at: DateTime<Utc>,
) -> Result<String> {
    let document = ExportDocument {
        expenses: transactions,
        debts,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn from_json(text: &str) -> Result<ExportedData> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DebtDirection, TransactionKind};
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal_macros::dec;

    fn sample() -> (Vec<Transaction>, Vec<Debt>) {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let transactions = vec![
            Transaction::new(date, "Salary", dec!(1000), "Salary", TransactionKind::Income),
            Transaction::new(date, "Groceries", dec!(300.75), "Food", TransactionKind::Expense),
        ];
        let debts = vec![Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe)
            .with_description("Concert tickets")];
        (transactions, debts)
    }

    #[test]
    fn stamps_export_time_in_iso_millis() {
        let (transactions, debts) = sample();
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let text = to_json_at(&transactions, &debts, at).unwrap();
        assert!(text.contains(r#""exportedAt": "2024-02-03T04:05:06.000Z""#));
        assert!(text.starts_with("{\n  \"expenses\": ["));
    }

    #[test]
    fn decode_reproduces_collections() {
        let (transactions, debts) = sample();
        let text = to_json(&transactions, &debts).unwrap();
        let decoded = from_json(&text).unwrap();
        assert_eq!(decoded.transactions, transactions);
        assert_eq!(decoded.debts, debts);
        assert!(decoded.exported_at.is_some());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(from_json("{\"expenses\": 3}").is_err());
    }
}
