//! Query cache merge and lookup operations.

use std::collections::HashMap;
use std::sync::Arc;

use super::snapshot::CacheSnapshot;
use crate::Error;
use crate::model::{Page, QueryEntry};

pub(crate) type EntryMap = HashMap<String, Arc<QueryEntry>>;

/// Accumulated hits per distinct query string.
///
/// Keys are exact: no trimming, no case folding. Cloning is cheap and the
/// clone shares entries with the original until either side merges.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<EntryMap>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first page of `query` still has to be fetched.
    ///
    /// Only guards page 0. Later pages are requested explicitly by the caller.
    pub fn needs_fetch(&self, query: &str) -> bool {
        !self.entries.contains_key(query)
    }

    /// Fold a fetched page into the entry for `query`.
    ///
    /// Page 0 replaces whatever was on record. Any other page is appended to
    /// the existing hits and requires page 0 to have been merged first.
    /// Overlapping hits across pages are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfOrderPage` if `page.page_number > 0` and there is
    /// no entry for `query`. The cache is left untouched.
    pub fn merge(&mut self, query: &str, page: Page) -> Result<Arc<QueryEntry>, Error> {
        let page_number = page.page_number;
        let incoming = page.hits.len();

        let entry = if page_number == 0 {
            QueryEntry::first(page)
        } else {
            let existing = self
                .entries
                .get(query)
                .ok_or_else(|| Error::OutOfOrderPage { query: query.to_string(), page: page_number })?;
            existing.appended(page)
        };

        let entry = Arc::new(entry);
        Arc::make_mut(&mut self.entries).insert(query.to_string(), Arc::clone(&entry));

        tracing::debug!(query, page = page_number, incoming, total = entry.len(), "merged page into query cache");

        Ok(entry)
    }

    /// Look up the accumulated entry for `query` without fetching.
    pub fn get(&self, query: &str) -> Option<Arc<QueryEntry>> {
        self.entries.get(query).cloned()
    }

    /// Borrow the entry for `query`.
    pub fn entry(&self, query: &str) -> Option<&QueryEntry> {
        self.entries.get(query).map(Arc::as_ref)
    }

    /// Freeze the current state of the cache.
    ///
    /// The snapshot is unaffected by later merges on this cache.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot::new(Arc::clone(&self.entries))
    }

    /// Number of distinct queries on record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query keys on record, in no particular order.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
