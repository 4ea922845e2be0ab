#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use fintrack::domain::{AppData, Debt, DebtDirection, Transaction, TransactionKind};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Income 1000, expenses 300 (two entries), one pending and one settled debt.
pub fn sample_data() -> AppData {
    let mut data = AppData::default();
    data.add_transaction(Transaction::new(
        date(2024, 1, 1),
        "Salary",
        dec!(1000),
        "Salary",
        TransactionKind::Income,
    ));
    data.add_transaction(Transaction::new(
        date(2024, 1, 3),
        "Rent, Jan",
        dec!(250),
        "Rent",
        TransactionKind::Expense,
    ));
    data.add_transaction(Transaction::new(
        date(2024, 1, 5),
        r#"He said "hi""#,
        dec!(50),
        "Food",
        TransactionKind::Expense,
    ));
    data.add_debt(
        Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe).with_due_date(date(2024, 2, 1)),
    );
    let mut settled = Debt::new("Ravi", dec!(120), DebtDirection::IOweThem);
    settled.toggle_status();
    data.add_debt(settled);
    data
}
