use std::{io, string::FromUtf8Error};

use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common record and report failures.
#[derive(Debug, Error)]
pub enum FinTrackError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Debt not found: {0}")]
    DebtNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, FinTrackError>;

/// Rejections raised while admitting raw input into the record collections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a non-negative number up to 1,000,000,000,000 with at most two decimals (got `{value}`)")]
    InvalidAmount { field: &'static str, value: String },
    #[error("{field} must be a date in YYYY-MM-DD format (got `{value}`)")]
    InvalidDate { field: &'static str, value: String },
    #[error("unknown {field} `{value}`")]
    InvalidChoice { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::InvalidAmount { field, .. }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::InvalidChoice { field, .. } => field,
        }
    }
}
