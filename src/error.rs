//! Error types for the fileops library and CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Naming errors
    #[error("Invalid file name '{name}': contains illegal character '{ch}'")]
    InvalidName { name: String, ch: char },

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("No unused name found for {} after {attempts} attempts", .path.display())]
    NamesExhausted { path: PathBuf, attempts: u32 },

    // File system errors
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to open file browser: {0}")]
    Open(String),

    #[error("Failed to move to trash: {0}")]
    Trash(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const INVALID_NAME: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DESTINATION_EXISTS: i32 = 4;
    pub const NAMES_EXHAUSTED: i32 = 5;
    pub const IO_ERROR: i32 = 6;
    pub const UNEXPECTED_ERROR: i32 = 7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_carries_character() {
        let err = Error::InvalidName {
            name: "te?xt".to_string(),
            ch: '?',
        };
        assert_eq!(
            err.to_string(),
            "Invalid file name 'te?xt': contains illegal character '?'"
        );
    }

    #[test]
    fn test_names_exhausted_message() {
        let err = Error::NamesExhausted {
            path: PathBuf::from("dir/file.txt"),
            attempts: 10,
        };
        assert_eq!(
            err.to_string(),
            "No unused name found for dir/file.txt after 10 attempts"
        );
    }
}
