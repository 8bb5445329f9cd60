//! File export formatters for the tickload ticker reference loader.
//!
//! This crate writes ticker records to files, projected onto a [`Schema`]:
//!
//! - [`CsvFormatter`] - CSV with a header row
//! - [`JsonFormatter`] - JSON array or NDJSON
//! - [`export_to_path`] - Overwrites a file with the formatted records
//!
//! [`Schema`]: tickload_types::Schema

#![doc(issue_tracker_base_url = "https://github.com/tickload/tickload/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, export_to_path};
pub use json::{JsonFormatter, JsonStyle};
