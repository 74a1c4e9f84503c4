//! In-memory backend implementation.
//!
//! Holds the demo data set in a plain vector. The records are created at
//! start-up and never change.
//!
//! # Example
//!
//! ```
//! use consultas_persistence::backends::memory::InMemoryBackend;
//!
//! // Fixed records plus 50 generated ones, reproducible through the seed
//! let backend = InMemoryBackend::seeded(50, Some(7));
//! assert_eq!(backend.len(), 54);
//! ```

mod backend;
pub mod seed;
mod storage;

pub use backend::InMemoryBackend;
