//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// File naming helpers CLI.
#[derive(Parser, Debug)]
#[command(
    name = "fileops",
    version,
    about = "Prepare folders, normalize suffixed names and find collision-free file names",
    long_about = "File naming helpers for desktop applications.\n\n\
                  Finds the first unused `name (N).ext` variant of a path, strips such suffixes,\n\
                  creates the folders a path needs and performs simple validated file operations."
)]
pub struct Args {
    /// Path to configuration file.
    /// Defaults to config.toml in the platform configuration directory.
    #[arg(short, long, env = "FILEOPS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of candidate names to check.
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the first unused variant of a path.
    Unique {
        path: PathBuf,
    },

    /// Strip a trailing " (N)" suffix from a name or path.
    Unsuffix {
        name: String,
    },

    /// Create the folders a path needs.
    Mkdirs {
        path: PathBuf,

        /// Treat the last segment as a file even without an extension.
        #[arg(long)]
        no_extension: bool,
    },

    /// Check a file name for reserved characters.
    CheckName {
        name: String,
    },

    /// Write text to a file, one argument per line.
    Write {
        path: PathBuf,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Append instead of replacing the contents.
        #[arg(long)]
        append: bool,
    },

    /// List the files in a folder.
    List {
        dir: PathBuf,

        /// Only list files with this extension.
        #[arg(long)]
        ext: Option<String>,

        /// Print the listing as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Copy a file next to itself under an unused name.
    Copy {
        path: PathBuf,
    },

    /// Rename a file, keeping its extension.
    Rename {
        path: PathBuf,

        /// New name without extension.
        new_name: String,
    },

    /// Delete a file or empty folder.
    Delete {
        path: PathBuf,
    },

    /// Move a file or folder to the trash.
    Trash {
        path: PathBuf,
    },

    /// Open a path in the file browser.
    Open {
        path: PathBuf,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(attempts) = self.max_attempts {
            config.naming.max_attempts = attempts;
        }

        if self.no_color {
            config.output.color = false;
        }
    }
}
