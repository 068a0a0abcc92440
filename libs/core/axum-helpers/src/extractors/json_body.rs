use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON request body whose rejection is an [`AppError::JsonExtractorRejection`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateCategory>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(|rejection| AppError::from(rejection).into_response())
    }
}
