use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::engine::ChessError;

/// Structured API error that serializes to JSON.
#[derive(Debug)]
pub enum ApiError {
    SessionNotFound(String),
    OutOfBounds(ChessError),
    EmptyOrigin(ChessError),
    InvalidPlacement(ChessError),
    InvalidRequest(String),
    TooManySessions(usize),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::SessionNotFound(id) => (
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
                format!("Session not found: {id}"),
            ),
            ApiError::OutOfBounds(err) => {
                (StatusCode::BAD_REQUEST, "OUT_OF_BOUNDS", err.to_string())
            }
            ApiError::EmptyOrigin(err) => {
                (StatusCode::BAD_REQUEST, "EMPTY_ORIGIN", err.to_string())
            }
            ApiError::InvalidPlacement(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_PLACEMENT", err.to_string())
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::TooManySessions(limit) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "TOO_MANY_SESSIONS",
                format!("Session limit of {limit} reached"),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChessError> for ApiError {
    fn from(err: ChessError) -> Self {
        match &err {
            ChessError::OutOfBounds(_) => ApiError::OutOfBounds(err),
            ChessError::EmptyOrigin(_) => ApiError::EmptyOrigin(err),
            ChessError::InvalidPlacement(_) => ApiError::InvalidPlacement(err),
            ChessError::InvalidSquare(_)
            | ChessError::UnknownPiece(_)
            | ChessError::UnknownSide(_)
            | ChessError::UnknownScenario(_) => ApiError::InvalidRequest(err.to_string()),
        }
    }
}

/// Malformed or mistyped request bodies get the same JSON error shape as
/// every other failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
