//! Record normalization: run date stamping and schema projection.

use serde_json::Value;
use std::borrow::Cow;

use crate::{RUN_DATE_FIELD, RunDate, Schema, TickerRecord};

/// How a sink represents a declared field that a record lacks or that is
/// an explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingPolicy {
    /// Absent and `null` both become an empty string (CSV export).
    EmptyString,
    /// Absent and `null` both stay null (JSON export).
    Null,
    /// Absent becomes an empty string, explicit `null` stays null
    /// (warehouse load).
    AbsentEmpty,
}

/// A single projected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// Missing value substituted with an empty string.
    Empty,
    /// Missing value kept as null.
    Null,
    /// A present, non-null upstream value.
    Value(&'a Value),
}

impl<'a> Cell<'a> {
    const fn absent(policy: MissingPolicy) -> Self {
        match policy {
            MissingPolicy::EmptyString | MissingPolicy::AbsentEmpty => Self::Empty,
            MissingPolicy::Null => Self::Null,
        }
    }

    const fn null(policy: MissingPolicy) -> Self {
        match policy {
            MissingPolicy::EmptyString => Self::Empty,
            MissingPolicy::Null | MissingPolicy::AbsentEmpty => Self::Null,
        }
    }

    /// Returns true for [`Cell::Empty`] and [`Cell::Null`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Empty | Self::Null)
    }

    /// Renders the cell as text.
    ///
    /// Strings are returned verbatim, other JSON values in their compact JSON
    /// form, and missing values as an empty string.
    #[must_use]
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            Self::Empty | Self::Null => Cow::Borrowed(""),
            Self::Value(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Self::Value(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// A record projected onto a schema, one cell per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    cells: Vec<Cell<'a>>,
}

impl<'a> Row<'a> {
    /// Returns the cells in schema order.
    #[must_use]
    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Stamps every record with the same run date under the `ds` field.
pub fn stamp_run_date(records: &mut [TickerRecord], run_date: RunDate) {
    let ds = run_date.to_string();
    for record in records {
        record.insert(RUN_DATE_FIELD, ds.clone());
    }
}

/// Projects records onto the schema's field order.
///
/// Each returned row has exactly `schema.len()` cells. Undeclared fields are
/// dropped and missing ones follow `policy`.
#[must_use]
pub fn normalize<'a>(
    records: &'a [TickerRecord],
    schema: &Schema,
    policy: MissingPolicy,
) -> Vec<Row<'a>> {
    records
        .iter()
        .map(|record| Row {
            cells: schema
                .names()
                .map(|name| match record.get(name) {
                    None => Cell::absent(policy),
                    Some(Value::Null) => Cell::null(policy),
                    Some(value) => Cell::Value(value),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn record(value: Value) -> TickerRecord {
        serde_json::from_value(value).unwrap()
    }

    fn run_date() -> RunDate {
        RunDate::from_date(NaiveDate::from_ymd_opt(2025, 12, 17).unwrap())
    }

    #[test]
    fn test_stamp_run_date_is_uniform() {
        let mut records = vec![
            record(json!({ "ticker": "A" })),
            record(json!({ "ticker": "AA", "ds": "1999-01-01" })),
            record(json!({})),
        ];
        stamp_run_date(&mut records, run_date());

        for r in &records {
            assert_eq!(r.get("ds"), Some(&json!("2025-12-17")));
        }
    }

    #[test]
    fn test_normalize_follows_schema_order() {
        let records = vec![record(json!({
            "share_class_figi": "BBG01PK1D1P4",
            "ticker": "HIT",
            "extra_field": "dropped",
            "active": true
        }))];
        let schema = Schema::file();
        let rows = normalize(&records, &schema, MissingPolicy::EmptyString);

        assert_eq!(rows.len(), 1);
        let cells = rows[0].cells();
        assert_eq!(cells.len(), schema.len());
        assert_eq!(cells[0].as_text(), "HIT");
        assert_eq!(cells[6].as_text(), "true");
        assert_eq!(cells[10].as_text(), "BBG01PK1D1P4");
        assert!(cells[1].is_missing());
    }

    #[test]
    fn test_missing_policy() {
        let records = vec![record(json!({ "ticker": "HIT", "cik": null }))];
        let schema = Schema::file();

        let csv_rows = normalize(&records, &schema, MissingPolicy::EmptyString);
        assert_eq!(csv_rows[0].cells()[8], Cell::Empty);
        assert_eq!(csv_rows[0].cells()[9], Cell::Empty);

        let json_rows = normalize(&records, &schema, MissingPolicy::Null);
        assert_eq!(json_rows[0].cells()[8], Cell::Null);
        assert_eq!(json_rows[0].cells()[9], Cell::Null);
        assert_eq!(json_rows[0].cells()[9].as_text(), "");

        // cik is an explicit null, composite_figi is absent.
        let wh_rows = normalize(&records, &schema, MissingPolicy::AbsentEmpty);
        assert_eq!(wh_rows[0].cells()[8], Cell::Null);
        assert_eq!(wh_rows[0].cells()[9], Cell::Empty);
    }

    #[test]
    fn test_stamped_records_project_ds_last() {
        let mut records = vec![record(json!({ "ticker": "HIT" }))];
        stamp_run_date(&mut records, run_date());
        let rows = normalize(&records, &Schema::warehouse(), MissingPolicy::AbsentEmpty);
        assert_eq!(rows[0].cells()[12].as_text(), "2025-12-17");

        // File export does not declare ds, so the stamp is dropped.
        let rows = normalize(&records, &Schema::file(), MissingPolicy::EmptyString);
        assert_eq!(rows[0].len(), 12);
    }

    #[test]
    fn test_nested_values_render_as_json() {
        let records = vec![record(json!({ "name": ["a", 1] }))];
        let rows = normalize(&records, &Schema::file(), MissingPolicy::EmptyString);
        assert_eq!(rows[0].cells()[1].as_text(), r#"["a",1]"#);
    }
}
