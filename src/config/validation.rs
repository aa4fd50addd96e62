//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Smallest usable attempt bound: the plain name plus `name (2)`.
const MIN_ATTEMPTS: u32 = 2;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_max_attempts(config.naming.max_attempts)?;
    validate_reserved_chars(&config.naming.extra_reserved_chars)?;

    Ok(())
}

/// Validate the collision attempt bound.
pub fn validate_max_attempts(attempts: u32) -> Result<()> {
    if attempts < MIN_ATTEMPTS {
        return Err(Error::ConfigValidation {
            field: "naming.max_attempts".to_string(),
            message: format!(
                "Must be at least {} (got {})",
                MIN_ATTEMPTS, attempts
            ),
        });
    }

    Ok(())
}

/// Validate extra reserved characters.
///
/// Rejecting these would make ordinary or suffixed names impossible.
pub fn validate_reserved_chars(chars: &[char]) -> Result<()> {
    for &c in chars {
        if c == '.' || c == '(' || c == ')' || c.is_whitespace() || c.is_alphanumeric() {
            return Err(Error::ConfigValidation {
                field: "naming.extra_reserved_chars".to_string(),
                message: format!("'{}' cannot be reserved", c.escape_default()),
            });
        }
    }

    Ok(())
}
