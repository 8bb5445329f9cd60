//! Cursor pagination over the tickers listing.

use async_trait::async_trait;
use tickload_types::TickerRecord;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    ApiConfig, FetchError, ListingPage, ListingQuery,
    url::{listing_url, next_page_url, redact},
};

/// Something that can fetch a single listing page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches and decodes the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a listing page.
    async fn fetch_page(&self, url: &Url) -> Result<ListingPage, FetchError>;
}

/// Progress reported after each page is accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based number of the page just processed.
    pub page: usize,
    /// Records on that page.
    pub page_records: usize,
    /// Records accumulated so far.
    pub total_records: usize,
}

/// Fetches every page of the listing, following `next_url` cursors.
///
/// Records are returned in page order without deduplication. Pagination
/// stops after a page without `next_url`, or at a page without `results`
/// (logged as a warning; the records collected so far are returned).
///
/// # Errors
///
/// Returns the first fetch error; nothing is retried.
pub async fn fetch_all<S, F>(
    source: &S,
    api: &ApiConfig,
    query: &ListingQuery,
    mut on_page: F,
) -> Result<Vec<TickerRecord>, FetchError>
where
    S: PageSource + ?Sized,
    F: FnMut(PageProgress),
{
    let mut records = Vec::new();
    let mut next = Some(listing_url(&api.base_url, query, &api.api_key)?);
    let mut page = 0;

    while let Some(current) = next.take() {
        page += 1;
        if page == 1 {
            info!(url = %redact(&current), "requesting first page");
        } else {
            info!(page, url = %redact(&current), "requesting next page");
        }

        let listing = source.fetch_page(&current).await?;
        let Some(results) = listing.results else {
            warn!(
                page,
                response = %serde_json::Value::Object(listing.other),
                "no 'results' key in response, stopping pagination"
            );
            break;
        };

        let page_records = results.len();
        records.extend(results);
        debug!(page, page_records, total = records.len(), "page accumulated");
        on_page(PageProgress {
            page,
            page_records,
            total_records: records.len(),
        });

        next = listing
            .next_url
            .map(|cursor| next_page_url(&api.base_url, &cursor, &api.api_key))
            .transpose()?;
    }

    info!(pages = page, records = records.len(), "listing exhausted");
    Ok(records)
}
