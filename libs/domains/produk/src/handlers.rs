use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::messages;
use crate::models::{
    CreateProduct, CreatedProduct, ProductDetail, ProductMessage, ProductSummary, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "produk";

/// OpenAPI documentation for the produk endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(
        ProductSummary,
        ProductDetail,
        CreateProduct,
        UpdateProduct,
        CreatedProduct,
        ProductMessage,
        ErrorResponse,
    )),
    tags(
        (name = TAG, description = "Product CRUD with brand and category names")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Products ordered by id", body = Vec<ProductSummary>),
        (status = 500, description = "Query failed; includes a hint", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductSummary>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = CreatedProduct),
        (status = 400, description = "nama_produk, merk_id or kategori_id missing", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let inserted_id = service.create_product(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedProduct {
            message: messages::CREATED.to_string(),
            inserted_id,
        }),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDetail),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductDetail>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Replace every column of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductMessage),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> ProductResult<Json<ProductMessage>> {
    service.update_product(&id, input).await?;
    Ok(Json(ProductMessage {
        message: messages::updated(&id),
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ProductMessage),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductMessage>> {
    service.delete_product(&id).await?;
    Ok(Json(ProductMessage {
        message: messages::deleted(&id),
    }))
}
