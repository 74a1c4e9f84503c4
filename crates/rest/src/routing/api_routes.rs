//! API route configuration.

use axum::{Router, routing::get};
use consultas_persistence::core::ConsultaRepository;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## API
/// - `GET /api/consultas` - List consultas
/// - `GET /api/consultas/{id}` - Read one consulta
/// - `GET /api/convenios` - Insurer catalogue
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes<R>(state: AppState<R>) -> Router
where
    R: ConsultaRepository + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<R>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<R>))
        // API routes
        .route("/api/consultas", get(handlers::list_handler::<R>))
        .route("/api/consultas/{id}", get(handlers::read_handler::<R>))
        .route("/api/convenios", get(handlers::insurers_handler::<R>))
        // State
        .with_state(state)
}
