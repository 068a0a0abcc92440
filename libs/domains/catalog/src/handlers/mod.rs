//! HTTP functions.
//!
//! Every function is mounted at `/<functionName>` and accepts exactly one
//! verb; any other verb is answered with 405 before the body is read.

mod association;
mod category;
mod product;
mod supplier;

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{MethodRouter, delete, get, post, put},
};
use axum_helpers::errors::handlers::method_not_allowed;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    AddProductsReport, Category, CreateCategory, CreateProduct, CreateSupplier, CreatedResponse,
    DeleteById, IncreaseStock, MessageResponse, Product, RemoveProductsReport, StockResponse,
    Supplier, SupplierProduct, SupplierProducts, UpdateProduct, UpdateSupplier,
};
use crate::product_ids::ProductIdSet;
use crate::service::CatalogService;
use crate::store::DocumentStore;

/// OpenAPI documentation for the catalog functions
#[derive(OpenApi)]
#[openapi(
    paths(
        category::create_category,
        product::create_product,
        product::get_products,
        product::update_product,
        product::delete_product,
        product::increase_stock,
        supplier::create_supplier,
        supplier::get_suppliers,
        supplier::get_supplier_by_id,
        supplier::update_supplier,
        supplier::delete_supplier,
        association::add_product_to_supplier,
        association::remove_product_from_supplier,
        association::add_multiple_products_to_supplier,
        association::remove_multiple_products_from_supplier,
    ),
    components(schemas(
        Category,
        Product,
        Supplier,
        ProductIdSet,
        CreateCategory,
        CreateProduct,
        UpdateProduct,
        DeleteById,
        IncreaseStock,
        CreateSupplier,
        UpdateSupplier,
        SupplierProduct,
        SupplierProducts,
        CreatedResponse,
        MessageResponse,
        StockResponse,
        AddProductsReport,
        RemoveProductsReport,
    )),
    tags(
        (name = "Categories", description = "Category functions"),
        (name = "Products", description = "Product functions"),
        (name = "Suppliers", description = "Supplier functions"),
        (name = "Supplier products", description = "Supplier-product association")
    )
)]
pub struct ApiDoc;

/// Create the router with every catalog function
pub fn router<S: DocumentStore + 'static>(service: CatalogService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/createCategory",
            function("createCategory", post(category::create_category::<S>)),
        )
        .route(
            "/createProduct",
            function("createProduct", post(product::create_product::<S>)),
        )
        .route(
            "/getProducts",
            function("getProducts", get(product::get_products::<S>)),
        )
        .route(
            "/updateProduct",
            function("updateProduct", put(product::update_product::<S>)),
        )
        .route(
            "/deleteProduct",
            function("deleteProduct", delete(product::delete_product::<S>)),
        )
        .route(
            "/increaseStock",
            function("increaseStock", post(product::increase_stock::<S>)),
        )
        .route(
            "/createSupplier",
            function("createSupplier", post(supplier::create_supplier::<S>)),
        )
        .route(
            "/getSuppliers",
            function("getSuppliers", get(supplier::get_suppliers::<S>)),
        )
        .route(
            "/getSupplierById",
            function("getSupplierById", get(supplier::get_supplier_by_id::<S>)),
        )
        .route(
            "/updateSupplier",
            function("updateSupplier", put(supplier::update_supplier::<S>)),
        )
        .route(
            "/deleteSupplier",
            function("deleteSupplier", delete(supplier::delete_supplier::<S>)),
        )
        .route(
            "/addProductToSupplier",
            function(
                "addProductToSupplier",
                put(association::add_product_to_supplier::<S>),
            ),
        )
        .route(
            "/removeProductFromSupplier",
            function(
                "removeProductFromSupplier",
                put(association::remove_product_from_supplier::<S>),
            ),
        )
        .route(
            "/addMultipleProductsToSupplier",
            function(
                "addMultipleProductsToSupplier",
                put(association::add_multiple_products_to_supplier::<S>),
            ),
        )
        .route(
            "/removeMultipleProductsFromSupplier",
            function(
                "removeMultipleProductsFromSupplier",
                put(association::remove_multiple_products_from_supplier::<S>),
            ),
        )
        .with_state(shared_service)
}

/// Wrap a single-verb route: log every invocation, answer other verbs with 405.
///
/// HEAD is rejected explicitly; axum would otherwise serve it with the GET
/// handler.
fn function<T>(name: &'static str, route: MethodRouter<T>) -> MethodRouter<T>
where
    T: Clone + Send + Sync + 'static,
{
    route
        .head(method_not_allowed)
        .fallback(method_not_allowed)
        .layer(middleware::from_fn_with_state(name, log_invocation))
}

async fn log_invocation(
    State(function): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!(function, method = %request.method(), "{} called", function);
    next.run(request).await
}
