//! CSV output format.

use std::borrow::Cow;
use std::io::Write;
use tickload_types::{Cell, MissingPolicy, Schema, TickerRecord, normalize};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Fields are written in schema order and quoted only when needed. Missing
/// and `null` values become empty strings.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[TickerRecord],
        schema: &Schema,
        writer: W,
    ) -> Result<usize, FormatError> {
        let mut csv = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        if self.include_header {
            csv.write_record(schema.names())?;
        }

        let rows = normalize(records, schema, MissingPolicy::EmptyString);
        for row in &rows {
            let cells: Vec<Cow<'_, str>> = row.cells().iter().map(Cell::as_text).collect();
            csv.write_record(cells.iter().map(|c| c.as_bytes()))?;
        }

        csv.flush()?;
        Ok(rows.len())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
