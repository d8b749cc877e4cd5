//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff and a bounded retry count
//! - Sequential pagination with a courtesy delay between pages
//! - Explicit request and connect timeouts

mod atom;

pub use atom::parse_feed;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{ArxivEntry, FeedPage};

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Query endpoint.
    api_url: String,

    /// Entries per page.
    page_size: u32,

    /// Entries per search.
    max_results: u32,

    /// Delay between page requests.
    page_delay: Duration,

    /// Reported in timeout errors.
    request_timeout: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/atom+xml"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(10))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let page_size = config.effective_page_size();

        Ok(Self {
            client,
            api_url: config.api_url,
            page_size,
            max_results: config.max_results,
            page_delay: config.page_delay,
            request_timeout: config.request_timeout,
        })
    }

    /// Maximum number of entries a search returns.
    #[must_use]
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Run a search, sorted by relevance, descending.
    ///
    /// Pages are fetched one after another until `max_results` entries are
    /// collected or the feed runs out.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a malformed feed.
    pub async fn search(&self, expression: &str) -> ClientResult<Vec<ArxivEntry>> {
        let mut entries: Vec<ArxivEntry> = Vec::new();
        let mut start = 0u32;

        loop {
            if start > 0 {
                tokio::time::sleep(self.page_delay).await;
            }

            let remaining = self.max_results.saturating_sub(start);
            let page = self.fetch_page(expression, start, self.page_size.min(remaining)).await?;
            start += page.entries.len() as u32;

            let more = page.has_more(start);
            entries.extend(page.entries);

            if !more || start >= self.max_results {
                break;
            }
        }

        entries.truncate(self.max_results as usize);
        tracing::debug!(query = %expression, count = entries.len(), "arXiv search complete");
        Ok(entries)
    }

    /// Fetch a single page of results.
    async fn fetch_page(&self, expression: &str, start: u32, max: u32) -> ClientResult<FeedPage> {
        let params = [
            ("search_query", expression.to_string()),
            ("start", start.to_string()),
            ("max_results", max.to_string()),
            ("sortBy", "relevance".to_string()),
            ("sortOrder", "descending".to_string()),
        ];

        tracing::debug!(start, max, "Requesting arXiv page");

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = self.handle_response(response).await?;
        let body = response.text().await.map_err(|e| self.body_error(e))?;

        let page = parse_feed(&body)?;
        reject_error_entry(&page)?;
        Ok(page)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        match (status.as_u16(), retry_after) {
            (429 | 503, Some(seconds)) => Err(ClientError::rate_limited(seconds)),
            (429, None) => Err(ClientError::rate_limited(3)),
            (400, _) => {
                let text = response.text().await.unwrap_or_default();
                // Bad queries come back as a feed with an error entry.
                if let Ok(page) = parse_feed(&text) {
                    reject_error_entry(&page)?;
                }
                Err(ClientError::UnexpectedStatus { status: 400, message: text })
            }
            (500..=599, _) => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    fn transport_error(&self, err: reqwest_middleware::Error) -> ClientError {
        match err {
            reqwest_middleware::Error::Reqwest(e) => self.body_error(e),
            other => ClientError::Middleware(other),
        }
    }

    fn body_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

fn reject_error_entry(page: &FeedPage) -> ClientResult<()> {
    match page.entries.iter().find(|e| e.is_error_entry()) {
        Some(entry) => Err(ClientError::feed(
            entry.summary.clone().unwrap_or_else(|| "arXiv rejected the query".to_string()),
        )),
        None => Ok(()),
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .field("max_results", &self.max_results)
            .finish()
    }
}
