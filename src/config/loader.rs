//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::fs::{ensure_parent_dirs, CollisionResolver, NameValidator, DEFAULT_MAX_ATTEMPTS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Naming and collision-resolution options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Upper bound on candidate names checked when looking for an unused name.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Characters rejected in file names on top of the built-in set.
    #[serde(default)]
    pub extra_reserved_chars: Vec<char>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            extra_reserved_chars: Vec::new(),
        }
    }
}

/// Console output options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether to color console output.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_true() -> bool {
    true
}

/// Location of the per-user configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileops").map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `path`, first writing the default configuration there if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Config::default();
        ensure_parent_dirs(path, true)?;
        config.save(path)?;
        tracing::info!("Wrote default configuration to {}", path.display());
        Ok(config)
    }

    /// Collision resolver honoring the configured attempt bound.
    pub fn resolver(&self) -> CollisionResolver {
        CollisionResolver::default().with_max_attempts(self.naming.max_attempts)
    }

    /// Name validator including the configured extra characters.
    pub fn validator(&self) -> NameValidator {
        NameValidator::with_extra_chars(self.naming.extra_reserved_chars.iter().copied())
    }
}
