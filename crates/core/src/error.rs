//! Unified error types for hn-search.
//!
//! Every message is prefixed with a stable code so front ends can match on
//! the failure class without parsing prose.

/// Unified error types for hn-search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A later page was merged before page 0 was on record for the query.
    #[error("OUT_OF_ORDER_PAGE: page {page} for query {query:?} has no page 0 on record")]
    OutOfOrderPage { query: String, page: u32 },

    /// Sort requested with a key name the sort engine does not know.
    #[error("UNKNOWN_SORT_KEY: {0}")]
    UnknownSortKey(String),

    /// Invalid input parameters (e.g., hits per page out of range).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// HTTP error response or network failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Search API rate limited.
    #[error("RATE_LIMITED: {0}")]
    RateLimited(String),

    /// Response body could not be decoded into a page.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),
}

impl Error {
    /// Stable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            Error::OutOfOrderPage { .. } => "OUT_OF_ORDER_PAGE",
            Error::UnknownSortKey(_) => "UNKNOWN_SORT_KEY",
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::FetchTimeout(_) => "FETCH_TIMEOUT",
            Error::HttpError(_) => "HTTP_ERROR",
            Error::RateLimited(_) => "RATE_LIMITED",
            Error::Parse(_) => "PARSE_ERROR",
        }
    }
}
