//! Search hit data model.
//!
//! These are the shapes exchanged between the transport, the cache and the
//! sort engine. The cache only ever looks at [`Hit::object_id`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One search result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hit {
    /// Unique identifier, stable across pages.
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Numeric rank. Comments and some stories carry none.
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Hit {
    /// Create a hit carrying only an identifier.
    pub fn new(object_id: impl Into<String>) -> Self {
        Self { object_id: object_id.into(), ..Default::default() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.points = Some(points);
        self
    }
}

/// Treat an explicit `null` like a missing string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One fetch's worth of hits plus its page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Page {
    pub hits: Vec<Hit>,
    pub page_number: u32,
}

impl Page {
    pub fn new(hits: Vec<Hit>, page_number: u32) -> Self {
        Self { hits, page_number }
    }
}

/// Accumulated state for one distinct query string.
///
/// Entries are immutable once built; a merge always produces a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryEntry {
    hits: Vec<Hit>,
    last_page: u32,
}

impl QueryEntry {
    /// Entry holding exactly the hits of a first page.
    pub(crate) fn first(page: Page) -> Self {
        Self { hits: page.hits, last_page: page.page_number }
    }

    /// New entry with `page` appended after this entry's hits.
    pub(crate) fn appended(&self, page: Page) -> Self {
        let mut hits = Vec::with_capacity(self.hits.len() + page.hits.len());
        hits.extend_from_slice(&self.hits);
        hits.extend(page.hits);
        Self { hits, last_page: page.page_number }
    }

    /// Accumulated hits in merge order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Page number of the most recently merged page.
    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
