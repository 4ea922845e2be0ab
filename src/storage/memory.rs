use std::sync::RwLock;

use crate::domain::AppData;

use super::{Result, StorageBackend};

/// In-process backend keeping the serialized blob, as the file backend would.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: RwLock<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with arbitrary text, e.g. a corrupted blob.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.read().ok().and_then(|guard| guard.clone())
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<AppData>> {
        let guard = match self.raw.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn write(&self, data: &AppData) -> Result<()> {
        let json = serde_json::to_string(data)?;
        let mut guard = match self.raw.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(json);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
