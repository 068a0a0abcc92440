use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Domain errors; the display text is the message returned to the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field is missing, empty or out of range
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("La categoría ya existe")]
    CategoryExists,

    #[error("La categoría no existe")]
    CategoryNotFound,

    #[error("Producto no encontrado")]
    ProductNotFound,

    #[error("Productos no encontrados: {}", .0.join(", "))]
    ProductsNotFound(Vec<String>),

    #[error("El proveedor ya existe")]
    SupplierExists,

    #[error("Proveedor no encontrado")]
    SupplierNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidInput(_) => AppError::BadRequest(message),
            CatalogError::CategoryExists | CatalogError::SupplierExists => {
                AppError::Conflict(message)
            }
            CatalogError::CategoryNotFound
            | CatalogError::ProductNotFound
            | CatalogError::ProductsNotFound(_)
            | CatalogError::SupplierNotFound => AppError::NotFound(message),
            CatalogError::Store(_) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status(err: CatalogError) -> StatusCode {
        AppError::from(err).parts().0
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status(CatalogError::InvalidInput("ID requerido")), StatusCode::BAD_REQUEST);
        assert_eq!(status(CatalogError::CategoryExists), StatusCode::CONFLICT);
        assert_eq!(status(CatalogError::SupplierExists), StatusCode::CONFLICT);
        assert_eq!(status(CatalogError::CategoryNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(CatalogError::SupplierNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status(CatalogError::Store(StoreError::Backend("down".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_products_are_listed() {
        let err = CatalogError::ProductsNotFound(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Productos no encontrados: a, b");
    }

    #[test]
    fn test_store_error_text_is_passed_through() {
        let err = CatalogError::Store(StoreError::Backend("connection reset".into()));
        let (_, _, message) = AppError::from(err).parts();
        assert_eq!(message, "Database error: connection reset");
    }
}
