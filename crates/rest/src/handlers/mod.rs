//! HTTP request handlers for the consultas API.
//!
//! - [`list`] - List consultas with filters, sorting and pagination
//! - [`read`] - Read a single consulta by id
//! - [`insurers`] - List the insurer catalogue
//! - [`health`] - Health check endpoints

pub mod health;
pub mod insurers;
pub mod list;
pub mod read;

// Re-export handlers for convenience
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use insurers::insurers_handler;
pub use list::list_handler;
pub use read::read_handler;
