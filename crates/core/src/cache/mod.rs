//! In-memory result cache for paginated search queries.
//!
//! This module owns the mapping from a query string to the hits fetched for
//! it so far. It supports:
//!
//! - First-fetch deduplication per query (`needs_fetch`)
//! - Page accumulation with a reset on page 0 (`merge`)
//! - Frozen snapshots readers can hold while merges continue
//!
//! Entries are never mutated in place. Every merge builds a new
//! [`QueryEntry`](crate::QueryEntry) and swaps it into a copy-on-write map,
//! so a reader can never see `hits` and `last_page` from different merges.

pub mod query;
pub mod snapshot;

pub use crate::Error;

pub use query::QueryCache;
pub use snapshot::CacheSnapshot;
