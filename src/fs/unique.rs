//! Collision-free destination names.
//!
//! Given `dir/report.txt`, the resolver hands back the first of
//! `dir/report.txt`, `dir/report (2).txt`, `dir/report (3).txt`, … that is not
//! already taken. Inputs that already carry a suffix are normalized first, so
//! `report (2).txt` continues the same sequence instead of producing
//! `report (2) (2).txt`.
//!
//! Nothing is reserved: the returned path was free when it was checked, and a
//! caller creating it later may still lose a race to another process.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::unsuffix;

/// Default bound on the number of candidate names checked.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000_000;

/// Answers whether a path is already taken.
pub trait ExistenceCheck {
    fn exists(&self, path: &Path) -> bool;
}

impl<F> ExistenceCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Existence check against the local filesystem.
///
/// Any directory entry counts as taken, including a dangling symlink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filesystem;

impl ExistenceCheck for Filesystem {
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }
}

/// Finds the first unused variant of a path.
#[derive(Debug, Clone)]
pub struct CollisionResolver<C = Filesystem> {
    check: C,
    max_attempts: u32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(Filesystem)
    }
}

impl<C: ExistenceCheck> CollisionResolver<C> {
    /// Create a resolver using `check` and the default attempt bound.
    pub fn new(check: C) -> Self {
        Self {
            check,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the attempt bound: the highest suffix tried, so `2` checks the
    /// plain name and `name (2)`. Below 2 only the plain name is checked.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Return the first path in the candidate sequence that does not exist.
    pub fn first_unused(&self, path: &Path) -> Result<PathBuf> {
        let base = canonical_path(path);

        if !self.check.exists(&base) {
            return Ok(base);
        }

        let stem = base.file_stem().unwrap_or_default();
        let ext = base.extension();
        let mut attempts = 1;

        for i in 2..=self.max_attempts {
            let candidate = base.with_file_name(candidate_name(stem, i, ext));
            tracing::debug!("Checking {}", candidate.display());
            attempts += 1;

            if !self.check.exists(&candidate) {
                return Ok(candidate);
            }
        }

        tracing::error!(
            "Gave up finding an unused name for {} after {} attempts",
            base.display(),
            attempts
        );
        Err(Error::NamesExhausted {
            path: base,
            attempts,
        })
    }
}

/// Shorthand for resolving against the filesystem with the default bound.
pub fn first_unused(path: &Path) -> Result<PathBuf> {
    CollisionResolver::default().first_unused(path)
}

/// `path` with any disambiguation suffix removed from its file name.
pub fn canonical_path(path: &Path) -> PathBuf {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => path.with_file_name(&*unsuffix(name)),
        None => path.to_path_buf(),
    }
}

fn candidate_name(stem: &OsStr, n: u32, ext: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!(" ({})", n));
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}
