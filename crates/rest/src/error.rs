//! Error types for the consultas REST API.
//!
//! Every error is returned as a small JSON body carrying the HTTP status and
//! a message:
//!
//! ```json
//! { "statusCode": 404, "statusMessage": "Consulta não encontrada" }
//! ```
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | NotFound | 404 |
//! | Backend | 500 |

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use consultas_persistence::error::StorageError;
use serde::Serialize;
use tracing::error;

/// Message returned when a record id does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Consulta não encontrada";

/// Message returned when a record id is not an integer.
pub const INVALID_ID_MESSAGE: &str = "ID inválido";

/// Message returned when the query string cannot be read.
pub const INVALID_QUERY_MESSAGE: &str = "Parâmetros de consulta inválidos";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Record not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code.
    pub status_code: u16,
    /// Human-readable message.
    pub status_message: String,
}

impl RestError {
    /// Not-found error with the standard record message.
    pub fn consulta_not_found() -> Self {
        RestError::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Bad-request error for a malformed record id.
    pub fn invalid_id() -> Self {
        RestError::BadRequest {
            message: INVALID_ID_MESSAGE.to_string(),
        }
    }

    /// Bad-request error for an unreadable query string.
    pub fn invalid_query() -> Self {
        RestError::BadRequest {
            message: INVALID_QUERY_MESSAGE.to_string(),
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            RestError::NotFound { message }
            | RestError::BadRequest { message }
            | RestError::InternalError { message } => message,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            status_message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => RestError::consulta_not_found(),
            StorageError::Backend { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
