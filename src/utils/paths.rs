use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".fintrack";
const DATA_FILE: &str = "fintrack_pro_data.json";
const CONFIG_FILE: &str = "config.json";
const EXPORT_DIR: &str = "exports";

/// Returns the application data directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the persisted record blob inside `base`.
pub fn data_file_in(base: &Path) -> PathBuf {
    base.join(DATA_FILE)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn export_dir_in(base: &Path) -> PathBuf {
    base.join(EXPORT_DIR)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sibling path used to stage atomic writes (`data.json` -> `data.json.tmp`).
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix_to_existing_extension() {
        let path = Path::new("/data/fintrack.json");
        assert_eq!(tmp_path(path), PathBuf::from("/data/fintrack.json.tmp"));
        assert_eq!(tmp_path(Path::new("/data/blob")), PathBuf::from("/data/blob.tmp"));
    }
}
