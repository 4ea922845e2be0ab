use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    domain::AppData,
    utils::paths::{ensure_dir, tmp_path},
};

use super::{Result, StorageBackend};

/// File-backed storage holding the pretty-printed blob at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn read(&self) -> Result<Option<AppData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write(&self, data: &AppData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Stages `data` in a `.tmp` sibling and renames it over `path`, so readers
/// never observe a half-written file.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Debt, DebtDirection};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("data.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_returns_same_blob() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested").join("data.json"));
        let mut data = AppData::default();
        data.add_debt(Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe));
        storage.write(&data).unwrap();
        assert_eq!(storage.read().unwrap(), Some(data));
        assert!(!tmp_path(storage.path()).exists());
    }

    #[test]
    fn garbage_is_reported_as_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(JsonStorage::new(path).read().is_err());
    }
}
