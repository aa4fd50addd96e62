//! File operations built on the naming helpers.
//!
//! Provides:
//! - Writing text to files (parent folders are created on demand)
//! - Listing the files of a folder
//! - Copying to a collision-free name, renaming, deleting
//! - Opening a path in the platform file browser, moving it to the trash

pub mod files;
pub mod shell;

pub use files::{
    copy_file, delete_file, list_files, rename_file, write_lines, write_string, FileEntry,
    WriteMode,
};
pub use shell::{move_to_trash, open_in_file_browser};
