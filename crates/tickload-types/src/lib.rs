//! Core types for the tickload ticker reference loader.
//!
//! This crate provides the data structures shared by every pipeline stage:
//!
//! - [`TickerRecord`] - A single ticker reference record as returned upstream
//! - [`Schema`] - The declared, ordered output field list with column types
//! - [`RunDate`] - The date stamped onto every record of a warehouse run
//! - [`normalize`] - Projection of records onto a schema
//! - [`require_env`] - Environment variable lookup shared by the config loaders

#![doc(issue_tracker_base_url = "https://github.com/tickload/tickload/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod env;
mod error;
mod normalize;
mod record;
mod run_date;
mod schema;

pub use env::{ConfigError, require_env};
pub use error::RunDateError;
pub use normalize::{Cell, MissingPolicy, Row, normalize, stamp_run_date};
pub use record::TickerRecord;
pub use run_date::RunDate;
pub use schema::{Field, FieldType, RUN_DATE_FIELD, SCHEMA_VERSION, Schema};
