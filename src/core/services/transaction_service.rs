//! Business logic helpers for managing transactions.

use tracing::debug;
use uuid::Uuid;

use crate::core::drafts::TransactionDraft;
use crate::domain::{AppData, Displayable, Identifiable, Transaction};
use crate::errors::FinTrackError;

use super::ServiceResult;

/// Provides validated CRUD helpers for transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, prepends the new transaction and returns its identifier.
    pub fn add(data: &mut AppData, draft: &TransactionDraft) -> ServiceResult<Uuid> {
        let txn = draft.build()?;
        let id = data.add_transaction(txn);
        debug!(%id, "transaction added");
        Ok(id)
    }

    /// Replaces every field but the identifier; the record keeps its position.
    pub fn update(data: &mut AppData, id: Uuid, draft: &TransactionDraft) -> ServiceResult<()> {
        if data.transaction(id).is_none() {
            return Err(FinTrackError::TransactionNotFound(id));
        }
        let mut replacement = draft.build()?;
        replacement.id = id;
        data.replace_transaction(replacement);
        debug!(%id, "transaction updated");
        Ok(())
    }

    /// Removes the transaction identified by `id`. Unknown ids are a no-op.
    pub fn remove(data: &mut AppData, id: Uuid) -> Option<Transaction> {
        let removed = data.remove_transaction(id);
        if let Some(txn) = &removed {
            debug!(record = %txn.display_label(), "transaction removed");
        }
        removed
    }

    /// Resolves a full id or a unique id prefix (as shown in listings).
    pub fn resolve(data: &AppData, needle: &str) -> ServiceResult<Uuid> {
        resolve_prefix(&data.transactions, needle)
            .ok_or_else(|| FinTrackError::TransactionNotFound(parse_or_nil(needle)))
    }

    /// Returns a snapshot of the transactions in collection order.
    pub fn list(data: &AppData) -> Vec<&Transaction> {
        data.transactions.iter().collect()
    }
}

pub(crate) fn resolve_prefix<T: Identifiable>(records: &[T], needle: &str) -> Option<Uuid> {
    let needle = needle.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    let mut matches = records.iter().map(Identifiable::id).filter(|id| {
        id.to_string().starts_with(&needle) || id.simple().to_string().starts_with(&needle)
    });
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

pub(crate) fn parse_or_nil(needle: &str) -> Uuid {
    Uuid::parse_str(needle.trim()).unwrap_or_else(|_| Uuid::nil())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use rust_decimal_macros::dec;

    fn draft(description: &str, amount: &str) -> TransactionDraft {
        TransactionDraft {
            date: "2024-04-01".into(),
            description: description.into(),
            amount: amount.into(),
            category: "Food".into(),
            kind: "expense".into(),
        }
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut data = AppData::default();
        let first = TransactionService::add(&mut data, &draft("Lunch", "120")).unwrap();
        TransactionService::add(&mut data, &draft("Dinner", "300")).unwrap();

        TransactionService::update(&mut data, first, &draft("Brunch", "150")).unwrap();

        assert_eq!(data.transactions[1].id, first);
        assert_eq!(data.transactions[1].description, "Brunch");
        assert_eq!(data.transactions[1].amount, dec!(150));
    }

    #[test]
    fn update_fails_for_missing_transaction() {
        let mut data = AppData::default();
        let err = TransactionService::update(&mut data, Uuid::new_v4(), &draft("x", "1"))
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, FinTrackError::TransactionNotFound(_)));
    }

    #[test]
    fn invalid_draft_is_not_admitted() {
        let mut data = AppData::default();
        let err = TransactionService::add(&mut data, &draft("", "10")).unwrap_err();
        assert!(matches!(
            err,
            FinTrackError::Validation(ValidationError::Missing { .. })
        ));
        assert!(data.transactions.is_empty());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut data = AppData::default();
        TransactionService::add(&mut data, &draft("Tea", "20")).unwrap();
        let before = data.clone();
        assert!(TransactionService::remove(&mut data, Uuid::new_v4()).is_none());
        assert_eq!(data, before);
    }

    #[test]
    fn resolves_unique_prefix() {
        let mut data = AppData::default();
        let id = TransactionService::add(&mut data, &draft("Tea", "20")).unwrap();
        let prefix = &id.simple().to_string()[..8];
        assert_eq!(TransactionService::resolve(&data, prefix).unwrap(), id);
        assert!(TransactionService::resolve(&data, "").is_err());
    }
}
