//! Subcommand dispatch.

use crate::cli::Command;
use crate::config::Config;
use crate::error::{exit_codes, Result};
use crate::fs::{classify, ensure_parent_dirs, unsuffix};
use crate::ops::{
    copy_file, delete_file, list_files, move_to_trash, open_in_file_browser, rename_file,
    write_lines, FileEntry, WriteMode,
};
use crate::output::{
    print_file_table, print_info, print_success, print_value, print_warning,
};

/// Serialize a folder listing as pretty-printed JSON.
pub fn render_listing(entries: &[FileEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Run a single subcommand and return the process exit code.
pub fn execute(command: Command, config: &Config) -> Result<i32> {
    match command {
        Command::Unique { path } => {
            let dest = config.resolver().first_unused(&path)?;
            print_value(&dest.display().to_string());
        }
        Command::Unsuffix { name } => {
            print_value(&unsuffix(&name));
        }
        Command::Mkdirs { path, no_extension } => {
            match classify(&path, no_extension).directories {
                None => print_info("Nothing to create"),
                Some(dirs) => {
                    if ensure_parent_dirs(&path, no_extension)? {
                        print_success(&format!("Created {}", dirs.display()));
                    } else {
                        print_info(&format!("{} already exists", dirs.display()));
                    }
                }
            }
        }
        Command::CheckName { name } => match config.validator().first_illegal_char(&name) {
            Some(ch) => {
                print_warning(&format!("'{}' contains illegal character '{}'", name, ch));
                return Ok(exit_codes::INVALID_NAME);
            }
            None => print_success(&format!("'{}' is a valid file name", name)),
        },
        Command::Write { path, text, append } => {
            let mode = if append {
                WriteMode::Append
            } else {
                WriteMode::Truncate
            };
            write_lines(&path, &text, mode)?;
            print_success(&format!("Wrote {}", path.display()));
        }
        Command::List { dir, ext, json } => {
            let entries = list_files(&dir, ext.as_deref())?;
            if json {
                print_value(&render_listing(&entries)?);
            } else {
                print_file_table(&entries);
            }
        }
        Command::Copy { path } => {
            let dest = copy_file(&path, &config.resolver())?;
            print_success(&format!("Copied to {}", dest.display()));
        }
        Command::Rename { path, new_name } => {
            let dest = rename_file(&path, &new_name, &config.validator())?;
            print_success(&format!("Renamed to {}", dest.display()));
        }
        Command::Delete { path } => {
            if delete_file(&path)? {
                print_success(&format!("Deleted {}", path.display()));
            } else {
                print_warning(&format!("Nothing to delete at {}", path.display()));
                return Ok(exit_codes::ABORT);
            }
        }
        Command::Trash { path } => {
            move_to_trash(&path)?;
            print_success(&format!("Moved {} to trash", path.display()));
        }
        Command::Open { path } => {
            open_in_file_browser(&path)?;
        }
    }

    Ok(exit_codes::SUCCESS)
}
