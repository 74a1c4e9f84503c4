//! Query parsing, filtering and ordering for the listing pipeline.
//!
//! - [`query`] - Raw query parameters and [`parse_list_query`]
//! - [`normalize()`] - Accent- and case-insensitive text folding
//! - [`FilterChain`] - Conjunctive per-field filters
//! - [`sort_records`] - Stable ordering by sort key
//!
//! # Pipeline
//!
//! ```text
//! RawQuery ──parse_list_query──▶ ListQuery ──resolve──▶ EffectiveRequest
//!                                                          │
//!     records ──apply_filters──▶ matches ──sort_records──▶ ordered
//! ```

mod filters;
mod normalize;
pub mod query;
mod sort;

pub use filters::{FieldFilter, FilterChain, NamePattern, apply_filters};
pub use normalize::normalize;
pub use query::{RawQuery, RawValue, keys, parse_list_query};
pub use sort::sort_records;
