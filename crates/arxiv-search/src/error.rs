//! Error types for the arXiv search front end.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Errors from the arXiv client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error (retries exhausted, transport failure)
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited by arXiv (429 or 503 with Retry-After)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Atom feed could not be parsed
    #[error("Malformed feed: {0}")]
    Feed(String),
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create a malformed feed error.
    #[must_use]
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed(message.into())
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for ClientError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Feed(err.to_string())
    }
}

/// Errors surfaced by the search page.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Error from the arXiv client
    #[error("arXiv API error: {0}")]
    Client(#[from] ClientError),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl SearchError {
    /// Convert to a user-friendly error message.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Timeout(after)) => {
                format!("arXiv did not respond within {:?}. Please try again.", after)
            }
            Self::Client(err) => err.retry_after().map_or_else(
                || self.to_string(),
                |wait| {
                    format!("arXiv is rate limiting requests. Please wait {:?} and try again.", wait)
                },
            ),
            Self::Render(_) => self.to_string(),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Search request failed");

        let body = format!("Search failed: {}", minijinja::HtmlEscape(&self.to_user_message()));
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for page-level operations.
pub type SearchResult<T> = Result<T, SearchError>;
