//! Umbrella error type.

use thiserror::Error;
use tickload_fetch::FetchError;
use tickload_types::{ConfigError, RunDateError};

/// Result type alias for tickload operations.
pub type Result<T> = std::result::Result<T, TickloadError>;

/// Errors that can occur anywhere in a tickload run.
#[derive(Error, Debug)]
pub enum TickloadError {
    /// Missing or invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid run date.
    #[error(transparent)]
    RunDate(#[from] RunDateError),

    /// Fetching the listing failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing the export file failed.
    #[cfg(feature = "format")]
    #[error(transparent)]
    Format(#[from] tickload_format::FormatError),

    /// Loading the warehouse table failed.
    #[cfg(feature = "warehouse")]
    #[error(transparent)]
    Warehouse(#[from] tickload_warehouse::WarehouseError),
}
