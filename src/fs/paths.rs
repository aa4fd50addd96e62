//! Path classification and directory preparation.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// How a path should be treated when preparing its directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathClass {
    /// Directory chain that must exist, or `None` when nothing needs creating.
    pub directories: Option<PathBuf>,
    /// Whether the terminal segment names a file.
    pub is_file: bool,
}

/// Classify `path` by its textual shape.
///
/// A terminal segment with an extension is a file, as is any terminal segment
/// when `file_has_no_extension` is set. Files need only their parent created;
/// everything else is treated as a chain of directories. A bare `name` with
/// no extension is therefore a directory unless the flag says otherwise.
pub fn classify(path: &Path, file_has_no_extension: bool) -> PathClass {
    let is_file = path.extension().is_some() || file_has_no_extension;

    let directories = if is_file {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    } else if path.as_os_str().is_empty() {
        None
    } else {
        Some(path.to_path_buf())
    };

    PathClass {
        directories,
        is_file,
    }
}

/// Create `path` and any missing ancestors.
///
/// Returns whether a new directory was created. Existing directories are not
/// an error.
pub fn create_directories(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(false);
    }

    std::fs::create_dir_all(path)?;
    tracing::debug!("Created directory {}", path.display());
    Ok(true)
}

/// Make sure the directories `path` needs exist.
///
/// See [`classify`] for how files and directories are told apart.
pub fn ensure_parent_dirs(path: &Path, file_has_no_extension: bool) -> Result<bool> {
    match classify(path, file_has_no_extension).directories {
        Some(dirs) => create_directories(&dirs),
        None => Ok(false),
    }
}
