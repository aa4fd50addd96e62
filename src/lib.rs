//! fileops - file naming helpers for desktop applications
//!
//! This library decides which folders a path needs, strips previously applied
//! ` (N)` disambiguation suffixes and finds the first unused variant of a
//! file name.
//!
//! # Features
//!
//! - Path classification and idempotent directory creation
//! - Strict suffix normalization that leaves legitimate parentheses alone
//! - Bounded collision search with an injectable existence check
//! - Reserved-character validation for file names
//! - Thin write / list / copy / rename / delete / trash / open operations
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fileops::fs::{first_unused, unsuffix};
//!
//! fn main() -> fileops::Result<()> {
//!     assert_eq!(unsuffix("report (2).txt"), "report.txt");
//!
//!     // "report.txt" if free, else "report (2).txt", "report (3).txt", ...
//!     let dest = first_unused(Path::new("out/report.txt"))?;
//!     println!("{}", dest.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod ops;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{
    classify, first_illegal_char, first_unused, unsuffix, CollisionResolver, ExistenceCheck,
    NameValidator, PathClass,
};
