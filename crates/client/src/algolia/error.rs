//! Search API client error types.

use std::sync::Arc;

use hnsearch_core::Error;

/// Errors from the Hacker News search API client.
#[derive(Debug, thiserror::Error)]
pub enum HnError {
    /// Base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid hitsPerPage parameter (must be 1-1000).
    #[error("invalid hits per page: must be 1-1000")]
    InvalidHitsPerPage,

    /// Rate limited by the search API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for HnError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { HnError::Timeout } else { HnError::Network(Arc::new(err)) }
    }
}

impl From<HnError> for Error {
    fn from(err: HnError) -> Self {
        match err {
            HnError::InvalidBaseUrl(_) | HnError::InvalidHitsPerPage => Error::InvalidInput(err.to_string()),
            HnError::InvalidQuery(msg) => Error::InvalidInput(msg),
            HnError::RateLimited => Error::RateLimited(err.to_string()),
            HnError::HttpError { status } => Error::HttpError(format!("HTTP {}", status)),
            HnError::Timeout => Error::FetchTimeout(err.to_string()),
            HnError::Network(_) => Error::HttpError(err.to_string()),
            HnError::Parse(msg) => Error::Parse(msg),
        }
    }
}
