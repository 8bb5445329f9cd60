//! Warehouse table loader for the tickload ticker reference loader.
//!
//! This crate replaces the contents of the tickers table on each run:
//!
//! - [`WarehouseConfig`] - Connection parameters, loaded from the environment
//! - [`Warehouse`] / [`WarehouseSession`] - Connection seam over the backend
//! - [`TableLoader`] - Create, truncate, batched insert and commit
//! - [`sql`] - Statement and literal rendering
//! - `SnowflakeWarehouse` - Snowflake backend (feature `snowflake`)

#![doc(issue_tracker_base_url = "https://github.com/tickload/tickload/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod loader;
mod session;
pub mod sql;

#[cfg(feature = "snowflake")]
mod snowflake;

pub use config::{DEFAULT_TABLE, WarehouseConfig};
pub use loader::{DEFAULT_BATCH_SIZE, LoadReport, LoadStage, TableLoader, WarehouseError};
pub use session::{BackendError, Warehouse, WarehouseSession};
pub use sql::TableRef;

#[cfg(feature = "snowflake")]
pub use crate::snowflake::{SnowflakeSession, SnowflakeWarehouse};
