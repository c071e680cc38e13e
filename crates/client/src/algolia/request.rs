//! Search API request types and validation.

use serde::Serialize;

use super::HnError;

/// Longest query the search API accepts, in bytes.
pub const MAX_QUERY_BYTES: usize = 512;

/// Search request parameters for the Hacker News search API.
///
/// Serializes to `query=..&page=..&hitsPerPage=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Full-text query. Empty selects the unfiltered front page.
    pub query: String,

    /// Zero-based page number.
    pub page: u32,

    /// Number of hits per page (1-1000, default 20).
    pub hits_per_page: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self { query: String::new(), page: 0, hits_per_page: 20 }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32, hits_per_page: u32) -> Self {
        Self { query: query.into(), page, hits_per_page }
    }

    /// Validate the search request parameters.
    ///
    /// Returns an error if any parameters are out of range.
    pub fn validate(&self) -> Result<(), HnError> {
        if self.query.len() > MAX_QUERY_BYTES {
            return Err(HnError::InvalidQuery(format!(
                "query too long: {} bytes (max {})",
                self.query.len(),
                MAX_QUERY_BYTES
            )));
        }

        if !(1..=1000).contains(&self.hits_per_page) {
            return Err(HnError::InvalidHitsPerPage);
        }

        Ok(())
    }
}
