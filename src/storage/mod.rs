//! Persistence Gateway: the whole [`AppData`] travels as one JSON blob.
//!
//! Saves overwrite the previous blob wholesale. Two processes sharing a data
//! file race with last-write-wins semantics; no locking is attempted.

pub mod gateway;
pub mod json_backend;
pub mod memory;

use crate::{domain::AppData, errors::FinTrackError};

pub type Result<T> = std::result::Result<T, FinTrackError>;

/// Abstraction over places an [`AppData`] blob can live.
pub trait StorageBackend: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<AppData>>;
    fn write(&self, data: &AppData) -> Result<()>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}

pub use gateway::PersistenceGateway;
pub use json_backend::{write_atomic, JsonStorage};
pub use memory::MemoryStorage;
