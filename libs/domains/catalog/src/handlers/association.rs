use axum::{Json, extract::State};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::{
    AddProductsReport, MessageResponse, RemoveProductsReport, SupplierProduct, SupplierProducts,
};
use crate::service::CatalogService;
use crate::store::DocumentStore;

/// Assign a product to a supplier
#[utoipa::path(
    put,
    path = "/addProductToSupplier",
    tag = "Supplier products",
    request_body = SupplierProduct,
    responses(
        (status = 200, description = "Product assigned, or already assigned", body = MessageResponse),
        (status = 400, description = "Missing supplier or product id", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier or product not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn add_product_to_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<SupplierProduct>,
) -> CatalogResult<Json<MessageResponse>> {
    let response = service.add_product_to_supplier(input).await?;
    Ok(Json(response))
}

/// Unassign a product from a supplier
#[utoipa::path(
    put,
    path = "/removeProductFromSupplier",
    tag = "Supplier products",
    request_body = SupplierProduct,
    responses(
        (status = 200, description = "Product unassigned, or was not assigned", body = MessageResponse),
        (status = 400, description = "Missing supplier or product id", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn remove_product_from_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<SupplierProduct>,
) -> CatalogResult<Json<MessageResponse>> {
    let response = service.remove_product_from_supplier(input).await?;
    Ok(Json(response))
}

/// Assign several products to a supplier
#[utoipa::path(
    put,
    path = "/addMultipleProductsToSupplier",
    tag = "Supplier products",
    request_body = SupplierProducts,
    responses(
        (status = 200, description = "Assignment report", body = AddProductsReport),
        (status = 400, description = "Missing supplier id or empty product list", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier not found, or the list of unknown products", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn add_multiple_products_to_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<SupplierProducts>,
) -> CatalogResult<Json<AddProductsReport>> {
    let report = service.add_multiple_products_to_supplier(input).await?;
    Ok(Json(report))
}

/// Unassign several products from a supplier
#[utoipa::path(
    put,
    path = "/removeMultipleProductsFromSupplier",
    tag = "Supplier products",
    request_body = SupplierProducts,
    responses(
        (status = 200, description = "Removal report", body = RemoveProductsReport),
        (status = 400, description = "Missing supplier id or empty product list", body = String, content_type = "text/plain"),
        (status = 404, description = "Supplier not found", body = String, content_type = "text/plain"),
        (status = 405, description = "Wrong verb", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub(super) async fn remove_multiple_products_from_supplier<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    JsonBody(input): JsonBody<SupplierProducts>,
) -> CatalogResult<Json<RemoveProductsReport>> {
    let report = service.remove_multiple_products_from_supplier(input).await?;
    Ok(Json(report))
}
