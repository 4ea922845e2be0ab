use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::currency::plain_amount;
use crate::domain::{Debt, Transaction};
use crate::errors::{FinTrackError, Result};

pub const CSV_HEADER: [&str; 6] = [
    "TYPE",
    "DATE",
    "DESCRIPTION",
    "AMOUNT",
    "CATEGORY/PERSON",
    "STATUS/TYPE",
];

const COMPLETED: &str = "COMPLETED";
const DEBT_TYPE: &str = "DEBT";
const NO_DUE_DATE: &str = "N/A";
const DEFAULT_DEBT_DESCRIPTION: &str = "Debt";

fn transaction_row(txn: &Transaction) -> [String; 6] {
    [
        txn.kind.as_str().to_string(),
        txn.date.format("%Y-%m-%d").to_string(),
        txn.description.clone(),
        plain_amount(txn.amount),
        txn.category.clone(),
        COMPLETED.to_string(),
    ]
}

fn debt_row(debt: &Debt) -> [String; 6] {
    [
        DEBT_TYPE.to_string(),
        debt.due_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NO_DUE_DATE.to_string()),
        debt.description
            .clone()
            .unwrap_or_else(|| DEFAULT_DEBT_DESCRIPTION.to_string()),
        plain_amount(debt.amount),
        debt.person.clone(),
        format!("{} - {}", debt.direction, debt.status),
    ]
}

/// Header plus one row per transaction, then one row per debt, each in
/// collection order. Fields are quoted only when they contain a delimiter,
/// quote or line break.
pub fn to_csv(transactions: &[Transaction], debts: &[Debt]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for txn in transactions {
        writer.write_record(&transaction_row(txn))?;
    }
    for debt in debts {
        writer.write_record(&debt_row(debt))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| FinTrackError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
