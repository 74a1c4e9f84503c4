//! Consultas Persistence Layer
//!
//! This crate holds the appointment ("consulta") record model, the repository
//! abstraction the REST layer reads from, and the listing pipeline that turns
//! raw query parameters into one page of records.
//!
//! # Architecture
//!
//! ```text
//! RawQuery ──► ListQuery ──► EffectiveRequest
//!                                   │
//!   Repository ──► FilterChain ──► sort ──► PageMetadata + nav URLs ──► slice
//! ```
//!
//! - [`types`] - Records, request and response types
//! - [`error`] - Error types for repository operations
//! - [`core`] - Repository trait and the listing service
//! - [`search`] - Normalizer, query parser, filters and sorter
//! - [`pagination`] - Page metadata, navigation URLs and slicing
//! - [`backends`] - Repository implementations and seed data
//!
//! # Quick Start
//!
//! ```
//! use consultas_persistence::backends::memory::InMemoryBackend;
//! use consultas_persistence::core::ConsultaService;
//! use consultas_persistence::search::{RawQuery, parse_list_query};
//!
//! # tokio_test::block_on(async {
//! let backend = InMemoryBackend::with_fixed_records();
//! let service = ConsultaService::new(backend);
//!
//! let raw = RawQuery::from_pairs([("nomeConvenio", "Unimed"), ("itensPorPagina", "2")]);
//! let response = service.list(&parse_list_query(&raw)).await.unwrap();
//!
//! assert_eq!(response.data.len(), 2);
//! assert_eq!(response.paginacao.total_items, 2);
//! assert!(response.paginacao.next_page_url.is_none());
//! # });
//! ```
//!
//! # Filtering
//!
//! Every text comparison goes through [`search::normalize`], so `"sulamerica"`
//! matches `"SulAmérica"`. Active filters are conjunctive; insurer names are a
//! union within their own field.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod pagination;
pub mod search;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use types::{Consulta, Doctor, Insurer, ListResponse, PageMetadata, Patient};
