//! Ticker reference record representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single ticker reference record.
///
/// Records keep the upstream JSON object as-is: no field is guaranteed to be
/// present, and fields the schema does not declare are carried until the
/// record is projected for a sink.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerRecord {
    fields: Map<String, Value>,
}

impl TickerRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns true if the record carries the field (even if `null`).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the ticker symbol, if present and a string.
    #[must_use]
    pub fn ticker(&self) -> Option<&str> {
        self.get("ticker").and_then(Value::as_str)
    }

    /// Returns the number of fields carried by the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the record, returning the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for TickerRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_upstream_json() {
        let record: TickerRecord = serde_json::from_value(json!({
            "ticker": "HIT",
            "name": "Health In Tech, Inc. Class A Common Stock",
            "active": true,
            "delisted_utc": null
        }))
        .unwrap();

        assert_eq!(record.ticker(), Some("HIT"));
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
        assert!(record.contains("delisted_utc"));
        assert!(!record.contains("cik"));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_record_insert_replaces() {
        let mut record = TickerRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.insert("ds", "2025-12-17"), None);
        assert_eq!(
            record.insert("ds", "2025-12-18"),
            Some(Value::String("2025-12-17".into()))
        );
        assert_eq!(record.get("ds").and_then(Value::as_str), Some("2025-12-18"));
    }

    #[test]
    fn test_non_string_ticker() {
        let record: TickerRecord = serde_json::from_value(json!({ "ticker": 42 })).unwrap();
        assert_eq!(record.ticker(), None);
    }
}
