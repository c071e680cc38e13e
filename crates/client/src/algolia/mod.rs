//! Hacker News search API client.
//!
//! Provides a client for the Algolia-hosted Hacker News search API with
//! request validation and response normalization.
//!
//! ### API
//!
//! - **Endpoint**: `https://hn.algolia.com/api/v1/search`
//! - **Parameters**: `query`, `page` (zero-based), `hitsPerPage`.
//! - **Authentication**: none.
//! - **Failures**: surfaced as-is; there is no retry or backoff.
//! - **Normalization**: Converts the API response into a [`Page`] plus query metadata.

pub mod error;
pub mod request;
pub mod response;

pub use error::HnError;
pub use request::SearchRequest;
pub use response::{DebugInfo, QueryMeta, SearchResponse};

use std::sync::Arc;
use std::time::{Duration, Instant};

use hnsearch_core::{AppConfig, Page};
use reqwest::header;
use url::Url;

/// Search API client configuration.
#[derive(Debug, Clone)]
pub struct HnConfig {
    /// Base URL (default: https://hn.algolia.com/api/v1).
    pub base_url: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    /// User-agent string (default: hn-search/0.x).
    pub user_agent: String,
    /// Hits requested per page (default: 20).
    pub hits_per_page: u32,
}

impl Default for HnConfig {
    /// Same values as the application configuration defaults.
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for HnConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            hits_per_page: config.hits_per_page,
        }
    }
}

/// Hacker News search API client.
#[derive(Debug, Clone)]
pub struct HnClient {
    http: reqwest::Client,
    search_url: Url,
    config: HnConfig,
}

impl HnClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HnConfig) -> Result<Self, HnError> {
        let search_url = Self::search_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| HnError::Network(Arc::new(e)))?;

        Ok(Self { http, search_url, config })
    }

    /// Resolve the `/search` endpoint below `base_url`.
    fn search_url(base_url: &str) -> Result<Url, HnError> {
        let base = base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/search")).map_err(|e| HnError::InvalidBaseUrl(format!("{base_url}: {e}")))
    }

    /// Request for `query` at `page` using the configured page size.
    pub fn request(&self, query: &str, page: u32) -> SearchRequest {
        SearchRequest::new(query, page, self.config.hits_per_page)
    }

    /// Execute a search query.
    ///
    /// This method handles request validation and response normalization.
    pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse, HnError> {
        req.validate()?;

        let start = Instant::now();

        tracing::debug!(query = %req.query, page = req.page, "searching HN API");

        let http_response = self
            .http
            .get(self.search_url.clone())
            .header(header::ACCEPT, "application/json")
            .query(&req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("HN API response status: {}", status);

        if status == 429 {
            return Err(HnError::RateLimited);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(HnError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let api_response: response::HnApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| HnError::Parse(e.to_string()))?;

        if api_response.page != req.page {
            tracing::warn!(requested = req.page, returned = api_response.page, "API returned a different page");
        }

        tracing::debug!("search completed in {:?}, {} hits", start.elapsed(), api_response.hits.len());

        Ok(SearchResponse::from(api_response).with_timing(start))
    }

    /// Fetch one page of hits for `query`.
    pub async fn fetch(&self, query: &str, page: u32) -> Result<Page, HnError> {
        Ok(self.search(self.request(query, page)).await?.into_page())
    }
}
