//! # consultas-rest - HTTP API for consultas
//!
//! This crate exposes the consultas listing pipeline over HTTP with axum. It
//! wires a [`ConsultaRepository`] into the handlers, and adds CORS, request
//! tracing and timeouts around them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use consultas_persistence::backends::memory::InMemoryBackend;
//! use consultas_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let backend = InMemoryBackend::seeded(config.generated_records, config.seed);
//!
//!     let app = create_app_with_config(backend, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/api/consultas?params` |
//! | read | GET | `/api/consultas/{id}` |
//! | insurers | GET | `/api/convenios` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"statusCode": ..., "statusMessage": ...}`:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Malformed record id |
//! | 404 | Record not found |
//! | 500 | Repository failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (listing service, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for listing parameters
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::str::FromStr;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, StatusCode},
};
use consultas_persistence::core::ConsultaRepository;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust
/// use consultas_persistence::backends::memory::InMemoryBackend;
/// use consultas_rest::create_app;
///
/// let app = create_app(InMemoryBackend::with_fixed_records());
/// ```
pub fn create_app<R>(repository: R) -> Router
where
    R: ConsultaRepository + Send + Sync + 'static,
{
    create_app_with_config(repository, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes and the middleware stack: request tracing, a request
/// timeout, and CORS when enabled.
pub fn create_app_with_config<R>(repository: R, config: ServerConfig) -> Router
where
    R: ConsultaRepository + Send + Sync + 'static,
{
    info!(
        "Creating consultas API with backend: {}",
        repository.backend_name()
    );

    let state = AppState::new(repository, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer from the comma-separated config values, where `*`
/// allows anything. Entries that fail to parse are skipped.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new();

    let layer = match config.cors_origins.as_str() {
        "*" => layer.allow_origin(Any),
        origins => layer.allow_origin(comma_separated::<HeaderValue>(origins)),
    };

    let layer = match config.cors_methods.as_str() {
        "*" => layer.allow_methods(Any),
        methods => layer.allow_methods(comma_separated::<Method>(methods)),
    };

    match config.cors_headers.as_str() {
        "*" => layer.allow_headers(Any),
        headers => layer.allow_headers(comma_separated::<HeaderName>(headers)),
    }
}

fn comma_separated<T: FromStr>(value: &str) -> Vec<T> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| item.parse().ok())
        .collect()
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "consultas={level},consultas_rest={level},consultas_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
