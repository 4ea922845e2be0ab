//! Entry validation and record services layered over the domain model.

pub mod drafts;
pub mod services;

pub use drafts::{DebtDraft, TransactionDraft};
