//! HTTP client for the tickers listing.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::{ListingPage, PageSource, url::redact};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("tickload/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching the listing.
///
/// None of these are retried; the first one aborts the run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL, API key redacted.
        url: String,
    },

    /// Response body is not a listing page.
    #[error("Malformed listing response from {url}: {source}")]
    Decode {
        /// Requested URL, API key redacted.
        url: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A listing or cursor URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// HTTP client fetching listing pages one request at a time.
#[derive(Debug, Clone)]
pub struct TickerClient {
    client: Client,
}

impl TickerClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl PageSource for TickerClient {
    async fn fetch_page(&self, url: &Url) -> Result<ListingPage, FetchError> {
        // reqwest errors embed the request URL, which carries the key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: redact(url),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;
        ListingPage::from_slice(&body).map_err(|source| FetchError::Decode {
            url: redact(url),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListingQuery, url::listing_url};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a local port and returns its base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn fetch(status: &'static str, body: &'static str) -> Result<ListingPage, FetchError> {
        let base = serve_once(status, body).await;
        let url = listing_url(&base, &ListingQuery::default(), "secret-key").unwrap();
        TickerClient::with_defaults().unwrap().fetch_page(&url).await
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_listing() {
        let page = fetch(
            "200 OK",
            r#"{"results":[{"ticker":"A","active":true}],"status":"OK","next_url":"x"}"#,
        )
        .await
        .unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page.next_url.as_deref(), Some("x"));
        assert_eq!(page.other.get("status"), Some(&serde_json::json!("OK")));
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status() {
        let err = fetch("503 Service Unavailable", "").await.unwrap_err();

        let FetchError::Status { status, url } = &err else {
            panic!("expected status error, got {err:?}");
        };
        assert_eq!(*status, 503);
        assert!(url.contains("apiKey=***"));
        assert!(!err.to_string().contains("secret-key"));
    }

    #[tokio::test]
    async fn test_fetch_page_html_body() {
        let err = fetch("200 OK", "<html>maintenance</html>").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
        let message = err.to_string();
        assert!(message.starts_with("Malformed listing response"));
        assert!(!message.contains("secret-key"));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("tickload/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = TickerClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_status_error_is_redacted() {
        let url = Url::parse("https://api.massive.com/v3/reference/tickers?apiKey=secret").unwrap();
        let err = FetchError::Status {
            status: 401,
            url: redact(&url),
        };
        let message = err.to_string();
        assert!(message.starts_with("Server returned 401"));
        assert!(!message.contains("secret"));
    }
}
