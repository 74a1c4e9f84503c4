//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use consultas_persistence::core::ConsultaRepository;
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - `{ status, backend, records, timestamp }`
pub async fn health_handler<R>(State(state): State<AppState<R>>) -> RestResult<Response>
where
    R: ConsultaRepository + Send + Sync,
{
    debug!("Processing health check request");

    let records = state.repository().count().await?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.backend_name(),
        "records": records,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Ready once the repository answers a count.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Repository reachable
/// - `503 Service Unavailable` - Repository failed
pub async fn readiness_handler<R>(State(state): State<AppState<R>>) -> Response
where
    R: ConsultaRepository + Send + Sync,
{
    debug!("Processing readiness check request");

    let (status, storage) = match state.repository().count().await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
    };

    let response = serde_json::json!({
        "status": if status.is_success() { "ready" } else { "unavailable" },
        "backend": state.backend_name(),
        "checks": {
            "storage": storage
        }
    });

    (status, Json(response)).into_response()
}
