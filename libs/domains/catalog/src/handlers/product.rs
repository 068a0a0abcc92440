use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::{
    CreateProduct, CreatedResponse, DeleteById, IncreaseStock, MessageResponse, Product,
    StockResponse, UpdateProduct,
};
use crate::service::CatalogService;
use crate::store::DocumentStore;

/// Create a product under an existing category
#[utoipa::path(
    post,
    path = "/createProduct",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, description = "Missing category", body = String, content_type = "text/plain"),
        (status = 404, description = "Category does not exist", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn create_product<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List every product
#[utoipa::path(
    get,
    path = "/getProducts",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn get_products<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.get_products().await?;
    Ok(Json(products))
}

/// Update the given fields of a product
#[utoipa::path(
    put,
    path = "/updateProduct",
    tag = "Products",
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Missing id", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure, including an unknown id", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn update_product<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> CatalogResult<Json<MessageResponse>> {
    service.update_product(input).await?;
    Ok(Json(MessageResponse::new("Producto actualizado")))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/deleteProduct",
    tag = "Products",
    request_body = DeleteById,
    responses(
        (status = 200, description = "Product deleted, or did not exist", body = MessageResponse),
        (status = 400, description = "Missing id", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn delete_product<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<DeleteById>,
) -> CatalogResult<Json<MessageResponse>> {
    service.delete_product(input).await?;
    Ok(Json(MessageResponse::new("Producto eliminado")))
}

/// Increase the stock of a product
#[utoipa::path(
    post,
    path = "/increaseStock",
    tag = "Products",
    request_body = IncreaseStock,
    responses(
        (status = 200, description = "Stock increased", body = StockResponse),
        (status = 400, description = "Missing id or quantity not greater than 0", body = String, content_type = "text/plain"),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn increase_stock<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<IncreaseStock>,
) -> CatalogResult<Json<StockResponse>> {
    let response = service.increase_stock(input).await?;
    Ok(Json(response))
}
