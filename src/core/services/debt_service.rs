use tracing::debug;
use uuid::Uuid;

use crate::core::drafts::DebtDraft;
use crate::domain::{AppData, Debt, DebtStatus, Displayable};
use crate::errors::FinTrackError;

use super::transaction_service::{parse_or_nil, resolve_prefix};
use super::ServiceResult;

pub struct DebtService;

impl DebtService {
    /// Validates the draft and prepends a new pending debt.
    pub fn add(data: &mut AppData, draft: &DebtDraft) -> ServiceResult<Uuid> {
        let debt = draft.build()?;
        let id = data.add_debt(debt);
        debug!(%id, "debt added");
        Ok(id)
    }

    /// Replaces the editable fields in place. Status is carried over.
    pub fn update(data: &mut AppData, id: Uuid, draft: &DebtDraft) -> ServiceResult<()> {
        if data.debt(id).is_none() {
            return Err(FinTrackError::DebtNotFound(id));
        }
        let mut replacement = draft.build()?;
        replacement.id = id;
        data.replace_debt(replacement);
        debug!(%id, "debt updated");
        Ok(())
    }

    pub fn toggle_status(data: &mut AppData, id: Uuid) -> ServiceResult<DebtStatus> {
        let status = data
            .toggle_debt_status(id)
            .ok_or(FinTrackError::DebtNotFound(id))?;
        debug!(%id, %status, "debt status toggled");
        Ok(status)
    }

    /// Removes the debt identified by `id`. Unknown ids are a no-op.
    pub fn remove(data: &mut AppData, id: Uuid) -> Option<Debt> {
        let removed = data.remove_debt(id);
        if let Some(debt) = &removed {
            debug!(record = %debt.display_label(), "debt removed");
        }
        removed
    }

    pub fn resolve(data: &AppData, needle: &str) -> ServiceResult<Uuid> {
        resolve_prefix(&data.debts, needle)
            .ok_or_else(|| FinTrackError::DebtNotFound(parse_or_nil(needle)))
    }

    pub fn list(data: &AppData) -> Vec<&Debt> {
        data.debts.iter().collect()
    }
}
