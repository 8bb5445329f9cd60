//! JSON output format.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;
use tickload_types::{Cell, MissingPolicy, Row, Schema, TickerRecord, normalize};

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Each record becomes an object whose keys follow schema order. Missing
/// values are written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// A projected row serialized as an ordered object.
struct OrderedRecord<'a> {
    schema: &'a Schema,
    row: &'a Row<'a>,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.len()))?;
        for (name, cell) in self.schema.names().zip(self.row.cells()) {
            match cell {
                Cell::Value(value) => map.serialize_entry(name, value)?,
                Cell::Empty => map.serialize_entry(name, "")?,
                Cell::Null => map.serialize_entry(name, &())?,
            }
        }
        map.end()
    }
}

impl Formatter for JsonFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[TickerRecord],
        schema: &Schema,
        mut writer: W,
    ) -> Result<usize, FormatError> {
        let rows = normalize(records, schema, MissingPolicy::Null);
        let ordered: Vec<OrderedRecord<'_>> = rows
            .iter()
            .map(|row| OrderedRecord { schema, row })
            .collect();

        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &ordered)?;
                } else {
                    serde_json::to_writer(&mut writer, &ordered)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in &ordered {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(rows.len())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
