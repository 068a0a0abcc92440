pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent with every 405 response.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método no permitido";

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders as its status code with a plain-text body holding the
/// message; callers of the functions only ever see the status and that text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status, code and client-facing message for this error.
    pub fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::JsonExtractorRejection(e) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidJson,
                format!("Cuerpo de la solicitud inválido: {}", e.body_text()),
            ),
            AppError::QueryExtractorRejection(e) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidQuery,
                format!("Parámetros de consulta inválidos: {}", e.body_text()),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorCode::Conflict, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorCode::MethodNotAllowed,
                METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ),
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                error = code.as_str(),
                status = status.as_u16(),
                "{}",
                message
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                error = code.as_str(),
                status = status.as_u16(),
                "{}",
                message
            );
        }

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;

    async fn text_body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_errors_render_as_plain_text() {
        let response = AppError::Conflict("La categoría ya existe".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(text_body(response).await, "La categoría ya existe");
    }

    #[tokio::test]
    async fn test_method_not_allowed_message() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(text_body(response).await, METHOD_NOT_ALLOWED_MESSAGE);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::InternalServerError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
        ];
        for (error, expected) in cases {
            assert_eq!(error.parts().0, expected);
        }
    }
}
