//! Raw form input and the rules that admit it into the record collections.
//!
//! Everything downstream (aggregation, exports) assumes records passed
//! through here, so this is the only place values are checked.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::{Debt, DebtDirection, Transaction, TransactionKind};
use crate::errors::ValidationError;

/// Largest admitted amount. Together with the two-decimal limit this keeps
/// every amount within 15 significant digits, which survive the JSON float
/// encoding unchanged and cannot overflow any realistic sum.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);
pub const AMOUNT_DECIMALS: u32 = 2;

pub const SUGGESTED_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Rent",
    "Transport",
    "Utilities",
    "Shopping",
    "Health",
    "Entertainment",
    "Education",
    "Other",
];

pub const SUGGESTED_INCOME_CATEGORIES: &[&str] =
    &["Salary", "Freelance", "Investments", "Gifts", "Other"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unparsed transaction form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: String,
}

impl TransactionDraft {
    /// Prefills a draft from an existing record for editing.
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            description: txn.description.clone(),
            amount: txn.amount.to_string(),
            category: txn.category.clone(),
            kind: txn.kind.as_str().to_string(),
        }
    }

    /// Builds a transaction with a new identifier.
    pub fn build(&self) -> Result<Transaction, ValidationError> {
        let date = parse_date("date", &self.date)?;
        let description = required("description", &self.description)?;
        let amount = parse_amount("amount", &self.amount)?;
        let category = required("category", &self.category)?;
        let kind = TransactionKind::parse(&self.kind).ok_or_else(|| {
            choice_error("type", &self.kind)
        })?;
        Ok(Transaction::new(date, description, amount, category, kind))
    }
}

/// Unparsed debt form fields. Status is not part of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtDraft {
    pub person: String,
    pub amount: String,
    pub direction: String,
    pub due_date: String,
    pub description: String,
}

impl DebtDraft {
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            person: debt.person.clone(),
            amount: debt.amount.to_string(),
            direction: debt.direction.as_str().to_string(),
            due_date: debt
                .due_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            description: debt.description.clone().unwrap_or_default(),
        }
    }

    /// Builds a pending debt with a new identifier.
    pub fn build(&self) -> Result<Debt, ValidationError> {
        let person = required("person", &self.person)?;
        let amount = parse_amount("amount", &self.amount)?;
        let direction = DebtDirection::parse(&self.direction)
            .ok_or_else(|| choice_error("type", &self.direction))?;
        let mut debt = Debt::new(person, amount, direction);
        if !self.due_date.trim().is_empty() {
            debt.due_date = Some(parse_date("due date", &self.due_date)?);
        }
        let description = self.description.trim();
        if !description.is_empty() {
            debt.description = Some(description.to_string());
        }
        Ok(debt)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Missing { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    let invalid = || ValidationError::InvalidAmount {
        field,
        value: trimmed.to_string(),
    };
    let amount = Decimal::from_str(trimmed).map_err(|_| invalid())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }
    let amount = amount.abs().normalize();
    if amount.scale() > AMOUNT_DECIMALS || amount > MAX_AMOUNT || !survives_float(amount) {
        return Err(invalid());
    }
    Ok(amount)
}

fn survives_float(amount: Decimal) -> bool {
    amount
        .to_f64()
        .and_then(|float| Decimal::from_str(&float.to_string()).ok())
        .is_some_and(|back| back == amount)
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}

fn choice_error(field: &'static str, value: &str) -> ValidationError {
    if value.trim().is_empty() {
        ValidationError::Missing { field }
    } else {
        ValidationError::InvalidChoice {
            field,
            value: value.trim().to_string(),
        }
    }
}
