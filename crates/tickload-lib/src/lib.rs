//! Ticker reference loader: paginated listing fetch into CSV files or a
//! Snowflake table.
//!
//! This is a facade crate that re-exports functionality from the tickload
//! workspace crates and wires them into the two pipelines in [`pipeline`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use tickload_lib::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let api = ApiConfig::from_env()?;
//!     let client = TickerClient::with_defaults()?;
//!
//!     let written = tickload_lib::pipeline::export(
//!         &client,
//!         &api,
//!         &ListingQuery::default(),
//!         &CsvFormatter::new(),
//!         Path::new("tickers.csv"),
//!         |_| {},
//!     )
//!     .await?;
//!     println!("Wrote {written} records");
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/tickload/tickload/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod pipeline;

pub use error::{Result, TickloadError};

// Re-export core types
pub use tickload_types::*;

// Re-export fetch functionality
pub use tickload_fetch::{
    API_KEY_ENV, ApiConfig, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, FetchError, ListingPage,
    ListingQuery, PageProgress, PageSource, TickerClient, fetch_all,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickload_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, export_to_path,
};

// Re-export the warehouse loader
#[cfg(feature = "warehouse")]
pub use tickload_warehouse::{
    BackendError, DEFAULT_BATCH_SIZE, DEFAULT_TABLE, LoadReport, LoadStage, TableLoader,
    TableRef, Warehouse, WarehouseConfig, WarehouseError, WarehouseSession,
};

#[cfg(feature = "snowflake")]
pub use tickload_warehouse::{SnowflakeSession, SnowflakeWarehouse};

/// Prelude module for convenient imports.
///
/// ```
/// use tickload_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Result, TickloadError};

    pub use tickload_types::{MissingPolicy, RunDate, Schema, TickerRecord};

    pub use tickload_fetch::{ApiConfig, ClientConfig, ListingQuery, PageProgress, TickerClient};

    #[cfg(feature = "format")]
    pub use tickload_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "warehouse")]
    pub use tickload_warehouse::{LoadReport, TableLoader, WarehouseConfig};

    #[cfg(feature = "snowflake")]
    pub use tickload_warehouse::SnowflakeWarehouse;
}
