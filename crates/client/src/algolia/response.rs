//! Search API response types and normalization.

use std::time::Instant;

use hnsearch_core::{Hit, Page};
use serde::{Deserialize, Serialize};

/// Raw response from the Hacker News search API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HnApiResponse {
    pub hits: Vec<Hit>,
    pub page: u32,
    #[serde(default)]
    pub nb_pages: u32,
    #[serde(default)]
    pub nb_hits: u64,
    #[serde(default)]
    pub hits_per_page: u32,
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "processingTimeMS")]
    pub processing_time_ms: u64,
}

/// Normalized search response for internal use.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub page: Page,
    pub query: QueryMeta,
    pub debug: DebugInfo,
}

/// Normalized query metadata.
#[derive(Debug, Clone, Serialize)]
pub struct QueryMeta {
    pub original: String,
    pub total_hits: u64,
    pub total_pages: u32,
    pub hits_per_page: u32,
}

/// Debug information for the search.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

impl From<HnApiResponse> for SearchResponse {
    /// Convert raw API response to normalized internal format.
    fn from(raw: HnApiResponse) -> Self {
        SearchResponse {
            page: Page::new(raw.hits, raw.page),
            query: QueryMeta {
                original: raw.query,
                total_hits: raw.nb_hits,
                total_pages: raw.nb_pages,
                hits_per_page: raw.hits_per_page,
            },
            debug: DebugInfo { processing_time_ms: raw.processing_time_ms, elapsed_ms: None },
        }
    }
}

impl SearchResponse {
    /// Record the wall-clock time since `start`.
    pub fn with_timing(mut self, start: Instant) -> Self {
        self.debug.elapsed_ms = Some(start.elapsed().as_millis() as u64);
        self
    }

    /// Check if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.page.page_number < self.query.total_pages.saturating_sub(1)
    }

    /// Get the number of hits on this page.
    pub fn result_count(&self) -> usize {
        self.page.hits.len()
    }

    pub fn into_page(self) -> Page {
        self.page
    }
}
