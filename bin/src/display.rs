//! Display utilities and output formatting for the tickload CLI.

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tickload_lib::prelude::*;

/// Default output path for a formatter: `tickers.<extension>`.
pub(crate) fn default_output<F: Formatter>(formatter: &F) -> PathBuf {
    PathBuf::from(format!("tickers.{}", formatter.extension()))
}

/// Builds a CSV formatter for a single-byte delimiter.
pub(crate) fn csv_formatter(delimiter: char) -> Result<CsvFormatter> {
    let Ok(byte) = u8::try_from(delimiter) else {
        bail!("Delimiter must be a single ASCII character, got '{delimiter}'");
    };
    if !byte.is_ascii() || matches!(byte, b'"' | b'\r' | b'\n') {
        bail!("Delimiter must be a single ASCII character other than a quote or newline");
    }
    Ok(CsvFormatter::new().with_delimiter(byte))
}

/// Spinner reporting pages fetched and records accumulated.
pub(crate) fn page_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("Requesting first page");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Updates `pb` after a page has been accumulated.
pub(crate) fn report_page(pb: &ProgressBar, progress: PageProgress) {
    pb.set_message(format!(
        "Fetched page {} ({} tickers so far)",
        progress.page, progress.total_records
    ));
}

/// Prints where the export was written.
pub(crate) fn print_export(path: &Path, written: usize, quiet: bool) {
    if !quiet {
        println!("Wrote {written} tickers to {}", path.display());
    }
}
