//! Application state for the consultas REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the listing service over the repository, and the server
//! configuration.

use std::sync::Arc;

use consultas_persistence::core::{ConsultaRepository, ConsultaService};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `R` - The repository type (must implement [`ConsultaRepository`])
///
/// # Example
///
/// ```rust
/// use consultas_persistence::backends::memory::InMemoryBackend;
/// use consultas_rest::{AppState, ServerConfig};
///
/// let backend = InMemoryBackend::with_fixed_records();
/// let state = AppState::new(backend, ServerConfig::default());
/// assert_eq!(state.backend_name(), "memory");
/// ```
pub struct AppState<R> {
    /// The listing service.
    service: Arc<ConsultaService<R>>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since R is wrapped in Arc and doesn't need to be Clone
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: ConsultaRepository> AppState<R> {
    /// Creates a new AppState, building the listing service from the
    /// configured page limits.
    pub fn new(repository: R, config: ServerConfig) -> Self {
        let service = ConsultaService::new(repository).with_settings(config.page_settings());
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Returns the listing service.
    pub fn service(&self) -> &ConsultaService<R> {
        &self.service
    }

    /// Returns the repository behind the service.
    pub fn repository(&self) -> &R {
        self.service.repository()
    }

    /// Returns the backend name.
    pub fn backend_name(&self) -> &'static str {
        self.repository().backend_name()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
