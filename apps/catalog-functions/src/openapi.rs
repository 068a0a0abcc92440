//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Functions",
        version = "0.1.0",
        description = "HTTP functions for categories, products and suppliers backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceInfo;

/// Service info plus every catalog function.
///
/// The functions live at the root, so the catalog document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceInfo::openapi().merge_from(domain_catalog::ApiDoc::openapi())
    }
}
