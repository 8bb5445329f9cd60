//! Error types for tickload core types.

use thiserror::Error;

/// Error for a run date that is not a `YYYY-MM-DD` calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid run date '{input}': expected YYYY-MM-DD")]
pub struct RunDateError {
    /// The rejected input.
    pub input: String,
}
