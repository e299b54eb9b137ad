use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::todo_store::TodoNotFound;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every variant renders as a JSON `ErrorResponse` with a status code that
/// matches the failure.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter is not an integer
    InvalidId(String),
    /// No todo stored under the id
    TodoNotFound(i64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid todo ID: expected an integer, got '{}'", raw),
            ),
            ApiError::TodoNotFound(id) => {
                (StatusCode::NOT_FOUND, TodoNotFound(id).to_string())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<TodoNotFound> for ApiError {
    fn from(err: TodoNotFound) -> Self {
        ApiError::TodoNotFound(err.0)
    }
}

/// Parse a raw `{id}` path segment
pub fn parse_todo_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
