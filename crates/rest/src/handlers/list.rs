//! Listing handler.
//!
//! `GET [base]/api/consultas?params`

use axum::{Json, extract::State};
use consultas_persistence::core::ConsultaRepository;
use consultas_persistence::types::ListResponse;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListQueryExtractor;
use crate::state::AppState;

/// Handler for the listing endpoint.
///
/// # HTTP Request
///
/// `GET [base]/api/consultas`
///
/// # Query Parameters
///
/// - `paginaAtual` - Page number (default 1)
/// - `itensPorPagina` - Page size (default 15)
/// - `nomeMedico`, `nomePaciente` - Name substrings, accent/case-insensitive
/// - `nomeConvenio` - Comma-separated insurer names, any may match
/// - `dataCriacao` - Creation date prefix (`YYYY-MM-DD`)
/// - `ordenarPor`, `ordem` - Sort key and direction (default `dataCriacao`, `desc`)
///
/// # Response
///
/// - `200 OK` - `{ "data": [...], "paginacao": {...} }`
///
/// Malformed parameters never cause an error; they are treated as absent.
pub async fn list_handler<R>(
    State(state): State<AppState<R>>,
    query: ListQueryExtractor,
) -> RestResult<Json<ListResponse>>
where
    R: ConsultaRepository + Send + Sync,
{
    debug!(query = ?query.query(), "Processing list request");

    if let Some(delay) = state.config().response_delay() {
        tokio::time::sleep(delay).await;
    }

    let response = state.service().list(query.query()).await?;

    Ok(Json(response))
}
