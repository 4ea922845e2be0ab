use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::AppData;

use super::{JsonStorage, StorageBackend};

/// Loads and saves the record collections.
///
/// Neither direction surfaces failures to the caller: a missing or unreadable
/// blob loads as empty collections, and a failed save is logged and dropped.
#[derive(Clone)]
pub struct PersistenceGateway {
    backend: Arc<dyn StorageBackend>,
}

impl PersistenceGateway {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn json_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Arc::new(JsonStorage::new(path)))
    }

    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    pub fn load(&self) -> AppData {
        match self.backend.read() {
            Ok(Some(data)) => {
                info!(
                    location = %self.backend.describe(),
                    transactions = data.transactions.len(),
                    debts = data.debts.len(),
                    "loaded stored records"
                );
                data
            }
            Ok(None) => {
                info!(location = %self.backend.describe(), "no stored records; starting empty");
                AppData::default()
            }
            Err(err) => {
                warn!(
                    location = %self.backend.describe(),
                    error = %err,
                    "stored records unreadable; starting empty"
                );
                AppData::default()
            }
        }
    }

    /// Persists both collections. Returns whether the write succeeded so
    /// callers may report it, but nothing needs to act on the result.
    pub fn save(&self, data: &AppData) -> bool {
        match self.backend.write(data) {
            Ok(()) => {
                info!(location = %self.backend.describe(), "saved records");
                true
            }
            Err(err) => {
                warn!(location = %self.backend.describe(), error = %err, "failed to save records");
                false
            }
        }
    }
}
