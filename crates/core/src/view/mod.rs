//! Display ordering for accumulated hits.
//!
//! ### Sort policy
//! - `NONE` keeps input order.
//! - `TITLE` and `AUTHOR` sort ascending.
//! - `URL` and `POINTS` sort ascending and then reverse the whole result.
//! - Sorting is stable; hits with no value for the key sort after hits that
//!   have one, before any reversal.
//!
//! ### Reverse flag
//! The `reverse` flag is a second reversal applied on top of the key's own
//! policy. It is not an ascending/descending switch: `POINTS` with
//! `reverse = true` comes out ascending.

pub mod sort;
pub mod state;

pub use sort::{SortKey, result_view, result_view_by_name};
pub use state::SortState;
