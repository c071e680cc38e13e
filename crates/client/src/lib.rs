//! Client code for hn-search.
//!
//! This crate provides the Hacker News search API client, the transport
//! abstraction the session fetches pages through, and the session
//! controller shared by front ends.

pub mod algolia;
pub mod session;
pub mod transport;

pub use algolia::{HnClient, HnConfig, HnError, SearchRequest, SearchResponse};
pub use session::SearchSession;
pub use transport::SearchTransport;
