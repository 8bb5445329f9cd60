//! Listing response page.

use serde::Deserialize;
use serde_json::{Map, Value};
use tickload_types::TickerRecord;

/// One page of the tickers listing response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingPage {
    /// Records on this page; `None` when the response carries no `results`.
    #[serde(default)]
    pub results: Option<Vec<TickerRecord>>,
    /// Cursor for the next page; `None` on the last page.
    #[serde(default)]
    pub next_url: Option<String>,
    /// Remaining response members (`status`, `request_id`, `count`, `error`, ...).
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ListingPage {
    /// Creates a page with results and an optional cursor.
    #[must_use]
    pub fn new(results: Vec<TickerRecord>, next_url: Option<String>) -> Self {
        Self {
            results: Some(results),
            next_url,
            other: Map::new(),
        }
    }

    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object, or if `results`
    /// is present but not an array of objects.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if the page carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_page() {
        let body = br#"{
            "results": [
                {"ticker": "A", "name": "Agilent Technologies Inc.", "active": true},
                {"ticker": "AA", "name": "Alcoa Corporation", "active": true}
            ],
            "status": "OK",
            "request_id": "e70a4e8f",
            "count": 2,
            "next_url": "https://api.massive.com/v3/reference/tickers?cursor=YWN0aXZl"
        }"#;
        let page = ListingPage::from_slice(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(
            page.next_url.as_deref(),
            Some("https://api.massive.com/v3/reference/tickers?cursor=YWN0aXZl")
        );
        assert_eq!(page.other.get("status"), Some(&Value::String("OK".into())));
    }

    #[test]
    fn test_parse_error_page() {
        let body = br#"{"status": "ERROR", "error": "Unknown API Key"}"#;
        let page = ListingPage::from_slice(body).unwrap();
        assert!(page.results.is_none());
        assert!(page.next_url.is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn test_null_results_are_absent() {
        let page = ListingPage::from_slice(br#"{"results": null}"#).unwrap();
        assert!(page.results.is_none());
    }

    #[test]
    fn test_reject_malformed_bodies() {
        assert!(ListingPage::from_slice(b"<html>Bad Gateway</html>").is_err());
        assert!(ListingPage::from_slice(b"[1, 2, 3]").is_err());
        assert!(ListingPage::from_slice(br#"{"results": "nope"}"#).is_err());
        assert!(ListingPage::from_slice(br#"{"results": [1]}"#).is_err());
    }
}
