//! Configuration for the arXiv search front end.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query API endpoint (Atom feed).
    pub const API_URL: &str = "https://export.arxiv.org/api/query";

    /// Request timeout for a single page.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between consecutive page requests (arXiv asks for 3 seconds).
    pub const PAGE_DELAY: Duration = Duration::from_secs(3);

    /// Entries requested per page.
    pub const PAGE_SIZE: u32 = 50;

    /// Upper bound on papers fetched per search.
    pub const MAX_RESULTS: u32 = 50;

    /// Retries for transient failures (5xx, connection resets).
    pub const MAX_RETRIES: u32 = 3;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("arxiv-search/", env!("CARGO_PKG_VERSION"));
}

/// Limits applied to incoming search requests.
pub mod limits {
    /// Longest query text accepted, in characters. Longer input is truncated.
    pub const MAX_QUERY_CHARS: usize = 300;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv API URL (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay between page requests.
    pub page_delay: Duration,

    /// Entries per page.
    pub page_size: u32,

    /// Papers fetched per search.
    pub max_results: u32,

    /// Retry count for transient failures.
    pub max_retries: u32,
}

impl Config {
    /// Create a configuration with the default arXiv endpoint and limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_delay: api::PAGE_DELAY,
            page_size: api::PAGE_SIZE,
            max_results: api::MAX_RESULTS,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_delay: Duration::from_millis(0), // No delay in tests
            page_size: api::PAGE_SIZE,
            max_results: api::MAX_RESULTS,
            max_retries: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ARXIV_API_URL`, `ARXIV_PAGE_DELAY_MS` and `ARXIV_MAX_RESULTS`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(ms) = std::env::var("ARXIV_PAGE_DELAY_MS") {
            config.page_delay = Duration::from_millis(ms.parse()?);
        }
        if let Ok(max) = std::env::var("ARXIV_MAX_RESULTS") {
            config = config.with_max_results(max.parse()?);
        }

        Ok(config)
    }

    /// Set the per-search result cap, clamped to `1..=MAX_RESULTS`.
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, api::MAX_RESULTS);
        self
    }

    /// Page size actually requested: never more than the result cap.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, self.max_results.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
