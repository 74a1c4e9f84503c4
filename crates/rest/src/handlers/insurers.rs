//! Insurer catalogue handler.

use axum::{Json, extract::State};
use consultas_persistence::core::ConsultaRepository;
use consultas_persistence::types::Insurer;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the insurer list, used to fill the insurer filter.
///
/// # HTTP Request
///
/// `GET [base]/api/convenios`
///
/// # Response
///
/// - `200 OK` - `[{ "id": 1, "nome": "Unimed" }, ...]`, ordered by id
pub async fn insurers_handler<R>(State(state): State<AppState<R>>) -> RestResult<Json<Vec<Insurer>>>
where
    R: ConsultaRepository + Send + Sync,
{
    debug!("Processing insurers request");

    Ok(Json(state.service().insurers().await?))
}
