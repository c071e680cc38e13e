//! Page transport abstraction.
//!
//! The session only needs "give me page N of this query". Keeping that
//! behind a trait lets front ends and tests swap the HTTP client out.

use hnsearch_core::{Error, Page};

use crate::HnClient;

/// Fetches one page of hits for a query.
#[async_trait::async_trait]
pub trait SearchTransport: Send + Sync {
    /// Fetch page `page` (zero-based) of `query`.
    ///
    /// Implementations either resolve with a well-formed page or reject;
    /// they do not retry.
    async fn fetch_page(&self, query: &str, page: u32) -> Result<Page, Error>;
}

#[async_trait::async_trait]
impl SearchTransport for HnClient {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<Page, Error> {
        self.fetch(query, page).await.map_err(Error::from)
    }
}

#[async_trait::async_trait]
impl<T: SearchTransport + ?Sized> SearchTransport for std::sync::Arc<T> {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<Page, Error> {
        (**self).fetch_page(query, page).await
    }
}
