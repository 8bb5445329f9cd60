//! Environment-backed configuration helpers.

use std::env;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable {key}")]
    MissingEnv {
        /// The variable name.
        key: String,
    },

    /// A configuration value is present but unusable.
    #[error("Invalid value for {key}: {reason}")]
    Invalid {
        /// The variable or option name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Reads a required environment variable.
///
/// Only presence is checked; an empty value is returned as-is.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnv`] if the variable is unset or not valid Unicode.
pub fn require_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnv {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        let err = require_env("TICKLOAD_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingEnv {
                key: "TICKLOAD_TEST_SURELY_UNSET_VARIABLE".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Missing environment variable TICKLOAD_TEST_SURELY_UNSET_VARIABLE"
        );
    }

    #[test]
    fn test_present_env() {
        // PATH is set for any test process.
        assert!(require_env("PATH").is_ok());
    }
}
