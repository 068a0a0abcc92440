use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::{JsonBody, QueryParams};
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::{
    CreateSupplier, CreatedResponse, DeleteById, MessageResponse, Supplier, SupplierIdQuery,
    UpdateSupplier,
};
use crate::service::CatalogService;
use crate::store::DocumentStore;

/// Create a supplier
#[utoipa::path(
    post,
    path = "/createSupplier",
    tag = "Suppliers",
    request_body = CreateSupplier,
    responses(
        (status = 201, description = "Supplier created", body = CreatedResponse),
        (status = 400, description = "Missing name or repeated product ids", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown product ids", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 409, description = "Name already exists", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn create_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<CreateSupplier>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List every supplier
#[utoipa::path(
    get,
    path = "/getSuppliers",
    tag = "Suppliers",
    responses(
        (status = 200, description = "All suppliers", body = Vec<Supplier>),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn get_suppliers<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
) -> CatalogResult<Json<Vec<Supplier>>> {
    let suppliers = service.get_suppliers().await?;
    Ok(Json(suppliers))
}

/// Get a supplier by id
#[utoipa::path(
    get,
    path = "/getSupplierById",
    tag = "Suppliers",
    params(SupplierIdQuery),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 400, description = "Missing id", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn get_supplier_by_id<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    QueryParams(query): QueryParams<SupplierIdQuery>,
) -> CatalogResult<Json<Supplier>> {
    let supplier = service.get_supplier_by_id(query).await?;
    Ok(Json(supplier))
}

/// Update the given fields of a supplier
#[utoipa::path(
    put,
    path = "/updateSupplier",
    tag = "Suppliers",
    request_body = UpdateSupplier,
    responses(
        (status = 200, description = "Supplier updated", body = MessageResponse),
        (status = 400, description = "Missing id, empty name or repeated product ids", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier or products not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 409, description = "Name belongs to another supplier", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn update_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<UpdateSupplier>,
) -> CatalogResult<Json<MessageResponse>> {
    service.update_supplier(input).await?;
    Ok(Json(MessageResponse::new("Proveedor actualizado")))
}

/// Delete a supplier
#[utoipa::path(
    delete,
    path = "/deleteSupplier",
    tag = "Suppliers",
    request_body = DeleteById,
    responses(
        (status = 200, description = "Supplier deleted", body = MessageResponse),
        (status = 400, description = "Missing id", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn delete_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<DeleteById>,
) -> CatalogResult<Json<MessageResponse>> {
    service.delete_supplier(input).await?;
    Ok(Json(MessageResponse::new("Proveedor eliminado")))
}
