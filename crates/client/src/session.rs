//! Search session controller.
//!
//! Ties the query input, the per-query cache, the transport and the sort
//! header state together the way an interactive front end drives them:
//!
//! - `start` fetches the default query's first page
//! - `submit` serves a query from cache or fetches its first page
//! - `load_more` fetches the page after the last one on record
//! - `view` orders the current query's hits for display
//!
//! A fetched page is always merged under the query it was requested for.

use std::sync::Arc;

use hnsearch_core::{Error, Hit, QueryCache, QueryEntry, SortKey, SortState, result_view};

use crate::transport::SearchTransport;

/// One interactive search session over a single cache.
#[derive(Debug)]
pub struct SearchSession<T> {
    transport: T,
    cache: QueryCache,
    query: String,
    search_key: String,
    sort: SortState,
}

impl<T: SearchTransport> SearchSession<T> {
    /// Create a session whose input starts out as `default_query`.
    pub fn new(transport: T, default_query: impl Into<String>) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
            query: default_query.into(),
            search_key: String::new(),
            sort: SortState::default(),
        }
    }

    /// Submit the current input and fetch its first page unconditionally.
    pub async fn start(&mut self) -> Result<Arc<QueryEntry>, Error> {
        self.search_key = self.query.clone();
        let query = self.search_key.clone();
        self.fetch(query, 0).await
    }

    /// Replace the query input. Nothing is fetched until [`submit`](Self::submit).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Submit the current input.
    ///
    /// Returns `true` if the first page had to be fetched, `false` if the
    /// query was already cached.
    pub async fn submit(&mut self) -> Result<bool, Error> {
        self.search_key = self.query.clone();

        if !self.cache.needs_fetch(&self.search_key) {
            tracing::debug!(query = %self.search_key, "serving query from cache");
            return Ok(false);
        }

        let query = self.search_key.clone();
        self.fetch(query, 0).await?;
        Ok(true)
    }

    /// Fetch the page after the last one on record for the submitted query.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfOrderPage` without sending a request if the
    /// submitted query has no first page on record, and `Error::InvalidInput`
    /// if the last page on record is the largest representable page number.
    pub async fn load_more(&mut self) -> Result<Arc<QueryEntry>, Error> {
        let last = match self.cache.entry(&self.search_key) {
            Some(entry) => entry.last_page(),
            None => return Err(Error::OutOfOrderPage { query: self.search_key.clone(), page: 1 }),
        };
        let next = last
            .checked_add(1)
            .ok_or_else(|| Error::InvalidInput(format!("no page after {last} for query {:?}", self.search_key)))?;

        let query = self.search_key.clone();
        self.fetch(query, next).await
    }

    async fn fetch(&mut self, query: String, page: u32) -> Result<Arc<QueryEntry>, Error> {
        tracing::debug!(query = %query, page, "fetching page");

        let fetched = self.transport.fetch_page(&query, page).await.inspect_err(|e| {
            tracing::warn!(query = %query, page, error = %e, "page fetch failed");
        })?;

        self.cache.merge(&query, fetched)
    }

    /// Handle a click on a sort header.
    pub fn on_sort(&mut self, key: SortKey) {
        self.sort.on_sort(key);
    }

    /// Set the sort state directly, bypassing header click semantics.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Current query input.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last submitted query, whose results are on display.
    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// Accumulated entry for the submitted query.
    pub fn current(&self) -> Option<Arc<QueryEntry>> {
        self.cache.get(&self.search_key)
    }

    /// Last page on record for the submitted query, 0 if none.
    pub fn current_page(&self) -> u32 {
        self.cache.entry(&self.search_key).map(QueryEntry::last_page).unwrap_or(0)
    }

    /// Submitted query's hits ordered by the active sort state.
    pub fn view(&self) -> Vec<&Hit> {
        match self.cache.entry(&self.search_key) {
            Some(entry) => result_view(entry.hits(), self.sort.key, self.sort.reverse),
            None => Vec::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use hnsearch_core::Page;

    use super::*;

    /// In-memory transport serving canned pages and recording every request.
    #[derive(Debug, Default)]
    struct FakeTransport {
        pages: HashMap<(String, u32), Page>,
        calls: Mutex<Vec<(String, u32)>>,
        fail: bool,
    }

    impl FakeTransport {
        fn with_page(mut self, query: &str, page: u32, hits: &[(&str, i64)]) -> Self {
            let hits = hits.iter().map(|(id, points)| Hit::new(*id).with_points(*points)).collect();
            self.pages.insert((query.to_string(), page), Page::new(hits, page));
            self
        }

        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn calls(&self) -> Vec<(String, u32)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl SearchTransport for FakeTransport {
        async fn fetch_page(&self, query: &str, page: u32) -> Result<Page, Error> {
            self.calls.lock().unwrap().push((query.to_string(), page));
            if self.fail {
                return Err(Error::HttpError("HTTP 503".into()));
            }
            Ok(self.pages.get(&(query.to_string(), page)).cloned().unwrap_or_else(|| Page::new(Vec::new(), page)))
        }
    }

    fn ids(hits: &[&Hit]) -> Vec<String> {
        hits.iter().map(|h| h.object_id.clone()).collect()
    }

    #[tokio::test]
    async fn test_start_fetches_default_query() {
        let transport = FakeTransport::default().with_page("", 0, &[("a", 1)]);
        let mut session = SearchSession::new(transport, "");

        let entry = session.start().await.unwrap();

        assert_eq!(entry.len(), 1);
        assert_eq!(session.search_key(), "");
        assert_eq!(session.transport().calls(), [(String::new(), 0)]);
    }

    #[tokio::test]
    async fn test_submit_fetches_once_per_query() {
        let transport = FakeTransport::default().with_page("react", 0, &[("a", 5), ("b", 9)]);
        let mut session = SearchSession::new(transport, "");

        session.set_query("react");
        assert!(session.submit().await.unwrap());
        assert!(!session.submit().await.unwrap());

        assert_eq!(session.transport().calls(), [("react".to_string(), 0)]);
        assert_eq!(session.current().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_set_query_does_not_change_displayed_results() {
        let transport = FakeTransport::default().with_page("react", 0, &[("a", 5)]);
        let mut session = SearchSession::new(transport, "react");
        session.submit().await.unwrap();

        session.set_query("vue");

        assert_eq!(session.query(), "vue");
        assert_eq!(session.search_key(), "react");
        assert_eq!(ids(&session.view()), ["a"]);
    }

    #[tokio::test]
    async fn test_load_more_appends_next_page() {
        let transport = FakeTransport::default()
            .with_page("react", 0, &[("a", 5), ("b", 9)])
            .with_page("react", 1, &[("c", 1)]);
        let mut session = SearchSession::new(transport, "react");
        session.submit().await.unwrap();

        let entry = session.load_more().await.unwrap();

        assert_eq!(entry.last_page(), 1);
        assert_eq!(session.current_page(), 1);
        assert_eq!(ids(&session.view()), ["a", "b", "c"]);
        assert_eq!(session.transport().calls(), [("react".to_string(), 0), ("react".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_load_more_without_entry_does_not_fetch() {
        let mut session = SearchSession::new(FakeTransport::default(), "react");

        let result = session.load_more().await;

        assert!(matches!(result, Err(Error::OutOfOrderPage { page: 1, .. })));
        assert!(session.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_more_after_last_page_number() {
        let mut transport = FakeTransport::default().with_page("q", 0, &[("a", 1)]);
        transport.pages.insert(("q".to_string(), 1), Page::new(vec![Hit::new("z")], u32::MAX));
        let mut session = SearchSession::new(transport, "q");
        session.submit().await.unwrap();
        session.load_more().await.unwrap();
        assert_eq!(session.current_page(), u32::MAX);

        let result = session.load_more().await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(session.transport().calls().len(), 2);
        assert_eq!(ids(&session.view()), ["a", "z"]);
    }

    #[tokio::test]
    async fn test_returning_to_cached_query_keeps_its_pages() {
        let transport = FakeTransport::default()
            .with_page("react", 0, &[("a", 1)])
            .with_page("react", 1, &[("b", 2)])
            .with_page("vue", 0, &[("v", 3)]);
        let mut session = SearchSession::new(transport, "react");
        session.submit().await.unwrap();
        session.load_more().await.unwrap();

        session.set_query("vue");
        session.submit().await.unwrap();
        assert_eq!(ids(&session.view()), ["v"]);

        session.set_query("react");
        assert!(!session.submit().await.unwrap());
        assert_eq!(ids(&session.view()), ["a", "b"]);
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn test_view_applies_sort_state() {
        let transport = FakeTransport::default().with_page("q", 0, &[("a", 5), ("b", 9), ("c", 1)]);
        let mut session = SearchSession::new(transport, "q");
        session.submit().await.unwrap();

        session.on_sort(SortKey::Points);
        assert_eq!(ids(&session.view()), ["b", "a", "c"]);

        session.on_sort(SortKey::Points);
        assert!(session.sort_state().reverse);
        assert_eq!(ids(&session.view()), ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_cache_untouched() {
        let mut session = SearchSession::new(FakeTransport::failing(), "react");

        let result = session.submit().await;

        assert!(matches!(result, Err(Error::HttpError(_))));
        assert!(session.cache().needs_fetch("react"));
        assert!(session.view().is_empty());
        assert_eq!(session.current_page(), 0);
    }

    #[tokio::test]
    async fn test_shared_transport() {
        let transport = Arc::new(FakeTransport::default().with_page("q", 0, &[("a", 1)]));
        let mut session = SearchSession::new(Arc::clone(&transport), "q");

        session.submit().await.unwrap();

        assert_eq!(transport.calls().len(), 1);
    }
}
