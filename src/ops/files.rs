//! Reading, writing and shuffling files on disk.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::{ensure_parent_dirs, rename_path, CollisionResolver, ExistenceCheck, NameValidator};

/// How an existing file is treated when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file's contents.
    #[default]
    Truncate,
    /// Add to the end of the file.
    Append,
}

/// A file found by [`list_files`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub extension: Option<String>,
    pub size: u64,
}

fn open_for_write(path: &Path, mode: WriteMode) -> Result<File> {
    // The target is always a file, extension or not.
    ensure_parent_dirs(path, true)?;

    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    Ok(options.open(path)?)
}

/// Write `text` followed by a newline to `path`.
pub fn write_string(path: &Path, text: &str, mode: WriteMode) -> Result<()> {
    write_lines(path, [text], mode)
}

/// Write each string on its own line to `path`.
pub fn write_lines<I, S>(path: &Path, lines: I, mode: WriteMode) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut file = io::BufWriter::new(open_for_write(path, mode)?);
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    file.flush()?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// List the files (not folders) directly inside `dir`.
///
/// When `extension` is given, only files with exactly that extension are
/// returned; a leading `.` is optional and the comparison is case-sensitive.
/// Entries are sorted by name.
pub fn list_files(dir: &Path, extension: Option<&str>) -> Result<Vec<FileEntry>> {
    let wanted = extension
        .map(|e| e.trim_start_matches('.'))
        .filter(|e| !e.is_empty());

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str());
        if let Some(wanted) = wanted {
            if ext != Some(wanted) {
                continue;
            }
        }

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            extension: ext.map(str::to_string),
            size: entry.metadata()?.len(),
            path,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Copy `path` next to itself under the first unused name.
///
/// Returns the path of the copy. The copy keeps the source's permissions.
pub fn copy_file<C: ExistenceCheck>(path: &Path, resolver: &CollisionResolver<C>) -> Result<PathBuf> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }

    let dest = resolver.first_unused(path)?;
    copy_into_new(path, &dest, &metadata)?;

    tracing::info!("Copied {} to {}", path.display(), dest.display());
    Ok(dest)
}

/// Copy `src_path` into a freshly created `dest`, removing `dest` on failure.
fn copy_into_new(src_path: &Path, dest: &Path, metadata: &fs::Metadata) -> Result<()> {
    let mut src = File::open(src_path)?;
    // create_new: losing a race for the name surfaces as an error, not an overwrite.
    let mut out = OpenOptions::new().write(true).create_new(true).open(dest)?;

    let copied = io::copy(&mut src, &mut out)
        .and_then(|_| out.sync_all())
        .and_then(|_| fs::set_permissions(dest, metadata.permissions()));

    if let Err(e) = copied {
        drop(out);
        if let Err(cleanup) = fs::remove_file(dest) {
            tracing::warn!("Failed to remove partial copy {}: {}", dest.display(), cleanup);
        }
        return Err(e.into());
    }

    Ok(())
}

/// Rename the stem of `path` to `new_name`, keeping its extension.
///
/// Nothing is touched when the name contains a reserved character or the
/// destination already exists.
pub fn rename_file(path: &Path, new_name: &str, validator: &NameValidator) -> Result<PathBuf> {
    validator.validate(new_name)?;

    if fs::symlink_metadata(path).is_err() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let dest = rename_path(path, new_name);
    if fs::symlink_metadata(&dest).is_ok() {
        return Err(Error::DestinationExists(dest));
    }

    fs::rename(path, &dest)?;
    tracing::info!("Renamed {} to {}", path.display(), dest.display());
    Ok(dest)
}

/// Delete a file or empty folder.
///
/// Returns `false` when there was nothing to delete.
pub fn delete_file(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }

    tracing::info!("Deleted {}", path.display());
    Ok(true)
}
