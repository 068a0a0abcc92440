use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::{CreateCategory, CreatedResponse};
use crate::service::CatalogService;
use crate::store::DocumentStore;

/// Create a category
#[utoipa::path(
    post,
    path = "/createCategory",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = CreatedResponse),
        (status = 400, description = "Missing name", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 409, description = "Name already exists", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn create_category<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
