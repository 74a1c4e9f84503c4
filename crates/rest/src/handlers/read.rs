//! Read handler.
//!
//! `GET [base]/api/consultas/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use consultas_persistence::core::ConsultaRepository;
use consultas_persistence::types::Consulta;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for reading a single consulta.
///
/// # HTTP Request
///
/// `GET [base]/api/consultas/{id}`
///
/// # Response
///
/// - `200 OK` - The record
/// - `400 Bad Request` - `id` is not an integer (`ID inválido`)
/// - `404 Not Found` - No record has that id (`Consulta não encontrada`)
pub async fn read_handler<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> RestResult<Json<Consulta>>
where
    R: ConsultaRepository + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    let id: i64 = id.trim().parse().map_err(|_| RestError::invalid_id())?;
    let consulta = state.service().get(id).await?;

    Ok(Json(consulta))
}
