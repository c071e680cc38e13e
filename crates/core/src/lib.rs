//! Core types and shared functionality for hn-search.
//!
//! This crate provides:
//! - The search hit data model
//! - The per-query result cache and its merge rules
//! - The sort engine that orders accumulated hits for display
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use cache::{CacheSnapshot, QueryCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use model::{Hit, Page, QueryEntry};
pub use view::{SortKey, SortState, result_view, result_view_by_name};
