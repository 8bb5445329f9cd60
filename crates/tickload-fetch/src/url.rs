//! Massive tickers listing URL construction.

use url::Url;

/// Path of the tickers reference listing.
pub const LISTING_PATH: &str = "/v3/reference/tickers";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apiKey";

/// Filters and paging of the tickers listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Market filter (`stocks`, `crypto`, `fx`, `otc`, `indices`).
    pub market: String,
    /// Only list actively traded tickers.
    pub active: bool,
    /// Records per page.
    pub limit: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            market: "stocks".to_string(),
            active: true,
            limit: 1000,
        }
    }
}

/// Builds the first-page listing URL, sorted ascending by ticker.
///
/// # Example
///
/// ```
/// use tickload_fetch::url::{ListingQuery, listing_url};
///
/// let url = listing_url("https://api.massive.com", &ListingQuery::default(), "KEY").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.massive.com/v3/reference/tickers?market=stocks&active=true&order=asc&limit=1000&sort=ticker&apiKey=KEY"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if `base_url` is not an absolute URL.
pub fn listing_url(
    base_url: &str,
    query: &ListingQuery,
    api_key: &str,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.set_path(LISTING_PATH);
    url.query_pairs_mut()
        .append_pair("market", &query.market)
        .append_pair("active", if query.active { "true" } else { "false" })
        .append_pair("order", "asc")
        .append_pair("limit", &query.limit.to_string())
        .append_pair("sort", "ticker")
        .append_pair(API_KEY_PARAM, api_key);
    Ok(url)
}

/// Resolves a `next_url` cursor into a request URL.
///
/// Relative cursors are joined onto `base_url`. The API key is appended
/// unless the cursor already carries one.
///
/// # Errors
///
/// Returns an error if neither the cursor nor the base URL parse.
pub fn next_page_url(
    base_url: &str,
    next_url: &str,
    api_key: &str,
) -> Result<Url, url::ParseError> {
    let mut url = match Url::parse(next_url) {
        Ok(abs) => abs,
        Err(_) => Url::parse(base_url)?.join(next_url)?,
    };
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        url.query_pairs_mut().append_pair(API_KEY_PARAM, api_key);
    }
    Ok(url)
}

/// Returns the URL as a string with the API key masked, for logs and errors.
#[must_use]
pub fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
