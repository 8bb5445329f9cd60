//! Export command implementation.
//!
//! Fetches the full listing and overwrites a local file with it.

use crate::config::api_config;
use crate::display::{csv_formatter, default_output, page_spinner, print_export, report_page};
use crate::{GlobalArgs, LayoutArgs};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tickload_lib::pipeline;
use tickload_lib::prelude::*;

/// Fetch every ticker and write them to `output` in `format`.
pub(crate) async fn export(
    global: &GlobalArgs,
    query: &ListingQuery,
    output: Option<PathBuf>,
    format: OutputFormat,
    layout: &LayoutArgs,
) -> Result<()> {
    let api = api_config(global)?;
    let client = TickerClient::with_defaults().context("Failed to build HTTP client")?;

    match format {
        OutputFormat::Csv => {
            let formatter = csv_formatter(layout.delimiter)?.with_header(!layout.no_header);
            write_listing(global, &client, &api, query, &formatter, output).await
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new().with_pretty(layout.pretty);
            write_listing(global, &client, &api, query, &formatter, output).await
        }
        OutputFormat::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            write_listing(global, &client, &api, query, &formatter, output).await
        }
    }
}

async fn write_listing<F: Formatter>(
    global: &GlobalArgs,
    client: &TickerClient,
    api: &ApiConfig,
    query: &ListingQuery,
    formatter: &F,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| default_output(formatter));

    let progress = page_spinner(global.quiet);
    let on_page = |p: PageProgress| report_page(&progress, p);

    let written = match pipeline::export(client, api, query, formatter, &output, on_page).await {
        Ok(written) => {
            progress.finish_with_message(format!("Fetched {written} tickers"));
            written
        }
        Err(e) => {
            progress.abandon_with_message("Export failed");
            return Err(e).with_context(|| {
                format!(
                    "Failed to export {} to {}",
                    formatter.extension(),
                    output.display()
                )
            });
        }
    };

    print_export(&output, written, global.quiet);
    Ok(())
}
