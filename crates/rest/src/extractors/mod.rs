//! Axum extractors for the consultas API.
//!
//! - [`ListQueryExtractor`] - Parse listing query parameters

mod list_query;

pub use list_query::ListQueryExtractor;
