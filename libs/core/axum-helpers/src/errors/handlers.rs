use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Router fallback for paths that match no function.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Función no encontrada").into_response()
}

/// Method fallback for a function route called with the wrong verb.
///
/// Attach with `MethodRouter::fallback` so the verb check runs before any
/// body extraction.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
