//! Core repository trait and the listing service.
//!
//! - [`ConsultaRepository`] - Injected, read-only record source
//! - [`ConsultaService`] - Runs the listing pipeline over a repository
//!
//! ```text
//! ConsultaService<R: ConsultaRepository>
//!     ├── list(&ListQuery)  -> ListResponse
//!     ├── get(id)           -> Consulta
//!     └── insurers()        -> Vec<Insurer>
//! ```

mod repository;
mod service;

pub use repository::ConsultaRepository;
pub use service::{ConsultaService, DEFAULT_BASE_PATH};
