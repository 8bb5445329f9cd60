//! HTTP client and cursor pagination for the tickload ticker reference loader.
//!
//! This crate provides the fetch stage of the pipeline:
//!
//! - [`ApiConfig`] - API key and base URL, loaded from the environment
//! - [`url::listing_url`] - Builds the tickers listing URL
//! - [`TickerClient`] - HTTP client fetching one listing page at a time
//! - [`fetch_all`] - Follows `next_url` cursors until the listing is exhausted

#![doc(issue_tracker_base_url = "https://github.com/tickload/tickload/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod page;
mod paginate;
pub mod url;

pub use client::{ClientConfig, FetchError, TickerClient};
pub use config::{API_KEY_ENV, ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use page::ListingPage;
pub use paginate::{PageProgress, PageSource, fetch_all};
pub use url::ListingQuery;
