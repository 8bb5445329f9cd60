//! Upstream API credentials.

use tickload_types::{ConfigError, require_env};

/// Environment variable holding the Massive API key.
pub const API_KEY_ENV: &str = "MASSIVE_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MASSIVE_BASE_URL";

/// Default base URL of the Massive REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.massive.com";

/// Credentials and endpoint for the reference-data API.
#[derive(Clone)]
pub struct ApiConfig {
    /// API key sent as the `apiKey` query parameter.
    pub api_key: String,
    /// Scheme and host the listing path is appended to.
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config for the default endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the API key from `MASSIVE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(require_env(API_KEY_ENV)?))
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let config = ApiConfig::new("secret-key").with_base_url("http://localhost:8080");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("http://localhost:8080"));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::new("k").base_url, "https://api.massive.com");
    }
}
