//! Frozen, read-only views of the query cache.

use std::sync::Arc;

use super::query::EntryMap;
use crate::model::QueryEntry;

/// Point-in-time view of a [`QueryCache`](super::QueryCache).
///
/// Holding a snapshot never blocks the owning cache; the next merge there
/// copies the map instead of touching this one.
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    entries: Arc<EntryMap>,
}

impl CacheSnapshot {
    pub(crate) fn new(entries: Arc<EntryMap>) -> Self {
        Self { entries }
    }

    pub fn get(&self, query: &str) -> Option<Arc<QueryEntry>> {
        self.entries.get(query).cloned()
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
