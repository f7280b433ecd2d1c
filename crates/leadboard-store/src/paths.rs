//! Location of the SQLite slot file.

use crate::error::{Result, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILENAME: &str = "leadboard.sqlite3";

/// Returns the database path, creating its parent directory when needed.
///
/// Without an explicit path the file lives in the per-user data directory
/// (`$XDG_DATA_HOME/leadboard` on Linux), which is kept private to its owner.
pub fn resolve_db_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Ok(path)
        }
        None => {
            let dir = dirs::data_dir()
                .ok_or(StoreError::MissingHomeDir)?
                .join("leadboard");
            fs::create_dir_all(&dir)?;
            private_dir(&dir)?;
            Ok(dir.join(DB_FILENAME))
        }
    }
}

#[cfg(unix)]
fn private_dir(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    Ok(())
}

#[cfg(not(unix))]
fn private_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_db_path;
    use crate::error::StoreError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn custom_path_gets_its_parent_created() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("leads.sqlite3");
        let resolved = resolve_db_path(Some(path.clone())).expect("resolve");
        assert_eq!(resolved, path);
        assert!(temp.path().join("nested").is_dir());
    }

    #[test]
    fn bare_filename_is_accepted() {
        let resolved = resolve_db_path(Some(PathBuf::from("leads.sqlite3"))).expect("resolve");
        assert_eq!(resolved, PathBuf::from("leads.sqlite3"));
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = resolve_db_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDataPath(_)));
    }
}
