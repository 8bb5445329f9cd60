//! Load command implementation.
//!
//! Fetches the full listing and replaces the contents of the Snowflake table.

use crate::GlobalArgs;
use anyhow::Result;
use tickload_lib::prelude::*;

/// Fetch every ticker and load them into `table`, stamped with `run_date`.
#[cfg(feature = "snowflake")]
pub(crate) async fn load(
    global: &GlobalArgs,
    query: &ListingQuery,
    table: &str,
    batch_size: usize,
    run_date: RunDate,
) -> Result<()> {
    use crate::config::api_config;
    use crate::display::{page_spinner, report_page};
    use anyhow::{Context, anyhow};
    use tickload_lib::pipeline;

    // Resolve all configuration before any network call
    let api = api_config(global)?;
    let config = WarehouseConfig::from_env()?;
    let table = config.table(table)?;
    let loader = TableLoader::new(table.clone()).with_batch_size(batch_size);
    let warehouse = SnowflakeWarehouse::new(&config)
        .map_err(|e| anyhow!(e))
        .context("Failed to configure Snowflake client")?;
    let client = TickerClient::with_defaults().context("Failed to build HTTP client")?;

    let progress = page_spinner(global.quiet);
    let result = pipeline::load(
        &client,
        &api,
        query,
        &warehouse,
        &loader,
        run_date,
        |p| report_page(&progress, p),
    )
    .await;

    let report = match result {
        Ok(report) => {
            progress.finish_with_message(format!("Loaded {} tickers", report.rows));
            report
        }
        Err(TickloadError::Warehouse(e)) if e.table_modified() => {
            progress.abandon_with_message("Load failed");
            return Err(anyhow::Error::new(e))
                .with_context(|| format!("{table} was truncated and is now empty"));
        }
        Err(e) => {
            progress.abandon_with_message("Load failed");
            return Err(e).with_context(|| format!("Failed to load {table}"));
        }
    };

    if !global.quiet {
        println!(
            "Loaded {} tickers into {} in {} batches (ds = {run_date})",
            report.rows, report.table, report.batches
        );
    }
    Ok(())
}

/// Without a warehouse backend compiled in, loading is unavailable.
#[cfg(not(feature = "snowflake"))]
pub(crate) async fn load(
    _global: &GlobalArgs,
    _query: &ListingQuery,
    _table: &str,
    _batch_size: usize,
    _run_date: RunDate,
) -> Result<()> {
    anyhow::bail!("Snowflake support not compiled in. Rebuild with --features snowflake")
}
