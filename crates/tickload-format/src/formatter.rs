//! Output format abstraction.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tickload_types::{Schema, TickerRecord};
use tracing::info;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for record formatters.
pub trait Formatter: Send + Sync {
    /// Writes records projected onto `schema`, returning the number of
    /// records written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_records<W: Write + Send>(
        &self,
        records: &[TickerRecord],
        schema: &Schema,
        writer: W,
    ) -> Result<usize, FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Creates or truncates `path` and writes every record to it.
///
/// A failure part-way leaves a truncated file behind.
///
/// # Errors
///
/// Returns an error if the file cannot be created or writing fails.
pub fn export_to_path<F: Formatter>(
    formatter: &F,
    records: &[TickerRecord],
    schema: &Schema,
    path: &Path,
) -> Result<usize, FormatError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let written = formatter.write_records(records, schema, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        format = formatter.extension(),
        records = written,
        fields = schema.len(),
        schema_version = schema.version(),
        "export written"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CsvFormatter;
    use serde_json::json;

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_extension_round_trips() {
        for format in [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Ndjson] {
            assert_eq!(format.extension().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_export_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickers.csv");
        std::fs::write(&path, "stale contents\nfrom a previous run\nand more\n").unwrap();

        let records: Vec<TickerRecord> =
            vec![serde_json::from_value(json!({ "ticker": "HIT" })).unwrap()];
        let written =
            export_to_path(&CsvFormatter::new(), &records, &Schema::file(), &path).unwrap();

        assert_eq!(written, 1);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tickers.csv");
        let err = export_to_path(&CsvFormatter::new(), &[], &Schema::file(), &path).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
