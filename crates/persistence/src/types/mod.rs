//! Core types for records, listing requests and paged responses.
//!
//! - [`Consulta`] - The appointment record and its parts
//! - [`ListQuery`] / [`EffectiveRequest`] - Parsed and resolved listing requests
//! - [`ListResponse`] - Page metadata and the listing response

mod consulta;
mod pagination;
mod request;

pub use consulta::{Consulta, Doctor, Insurer, Patient};
pub use pagination::{ListResponse, NavigationUrls, PageCounts, PageMetadata};
pub use request::{
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, EffectiveRequest, ListQuery,
    PageSettings, SortDirection, SortKey,
};
