//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Produk API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Produk API",
        version = "0.1.0",
        description = "CRUD for products with brand and category lookups, backed by MySQL"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/user", api = domain_produk::ApiDoc)
    )
)]
pub struct ApiDoc;
