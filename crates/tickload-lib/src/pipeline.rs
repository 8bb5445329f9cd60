//! End-to-end runs: fetch the whole listing, then write one sink.
//!
//! The sink is only touched after every page has been fetched, so a fetch
//! failure leaves the previous file or table contents in place.

use tickload_fetch::{ApiConfig, ListingQuery, PageProgress, PageSource, fetch_all};
use tickload_types::TickerRecord;
use tracing::info;

use crate::Result;

/// Fetches every record of the listing.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn collect<S, P>(
    source: &S,
    api: &ApiConfig,
    query: &ListingQuery,
    on_page: P,
) -> Result<Vec<TickerRecord>>
where
    S: PageSource + ?Sized,
    P: FnMut(PageProgress),
{
    let records = fetch_all(source, api, query, on_page).await?;
    info!(records = records.len(), "fetched all tickers");
    Ok(records)
}

/// Fetches the listing and overwrites `path` with the file schema.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if fetching or writing fails.
#[cfg(feature = "format")]
pub async fn export<S, F, P>(
    source: &S,
    api: &ApiConfig,
    query: &ListingQuery,
    formatter: &F,
    path: &std::path::Path,
    on_page: P,
) -> Result<usize>
where
    S: PageSource + ?Sized,
    F: tickload_format::Formatter,
    P: FnMut(PageProgress),
{
    let records = collect(source, api, query, on_page).await?;
    let schema = tickload_types::Schema::file();
    let written = tickload_format::export_to_path(formatter, &records, &schema, path)?;
    Ok(written)
}

/// Fetches the listing, stamps every record with `run_date` and replaces the
/// contents of the loader's table.
///
/// # Errors
///
/// Returns an error if fetching fails or the load fails at any stage.
#[cfg(feature = "warehouse")]
pub async fn load<S, W, P>(
    source: &S,
    api: &ApiConfig,
    query: &ListingQuery,
    warehouse: &W,
    loader: &tickload_warehouse::TableLoader,
    run_date: tickload_types::RunDate,
    on_page: P,
) -> Result<tickload_warehouse::LoadReport>
where
    S: PageSource + ?Sized,
    W: tickload_warehouse::Warehouse,
    P: FnMut(PageProgress),
{
    let mut records = collect(source, api, query, on_page).await?;
    tickload_types::stamp_run_date(&mut records, run_date);
    info!(%run_date, records = records.len(), "stamped run date");

    let schema = tickload_types::Schema::warehouse();
    let report = loader.load(warehouse, &records, &schema).await?;
    Ok(report)
}
