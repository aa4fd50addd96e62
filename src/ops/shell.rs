//! Desktop shell integration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Open `path` with the platform's default handler (a file browser for folders).
pub fn open_in_file_browser(path: &Path) -> Result<()> {
    let path = resolve_existing(path)?;

    opener::open(&path)
        .map_err(|e| Error::Open(format!("opening {} failed: {}", path.display(), e)))?;

    tracing::info!("Opened {}", path.display());
    Ok(())
}

/// Move `path` to the platform's trash / recycle bin.
pub fn move_to_trash(path: &Path) -> Result<()> {
    let path = resolve_existing(path)?;

    trash::delete(&path)
        .map_err(|e| Error::Trash(format!("trashing {} failed: {}", path.display(), e)))?;

    tracing::info!("Moved {} to trash", path.display());
    Ok(())
}

/// Absolute form of an existing path.
///
/// Relative paths and forward slashes are not understood by every shell API.
fn resolve_existing(path: &Path) -> Result<PathBuf> {
    if std::fs::symlink_metadata(path).is_err() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_in_file_browser(&dir.path().join("doesnt exist"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_trash_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("recycle.txt");

        let result = move_to_trash(&missing);
        assert!(matches!(result, Err(Error::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_resolve_existing_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        let resolved = resolve_existing(&file).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, file.canonicalize().unwrap());
    }
}
