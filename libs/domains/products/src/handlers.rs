use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use axum_helpers::errors::responses::{BadRequestErrorResponse, InternalServerErrorResponse};
use axum_helpers::extractors::{AppJson, AppQuery};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::models::{Product, UpdateQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Body of a successful create
pub const PRODUCT_CREATED: &str = "product created";
/// Body of a failed create
pub const PRODUCT_NOT_SAVED: &str = "could not save product";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product),
    components(
        schemas(Product),
        responses(BadRequestErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, meant to be nested under `/products`.
///
/// - `GET /` list
/// - `POST /create` create
/// - `PUT /update?id=` update
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/create", post(create_product))
        .route("/update", put(update_product))
        .with_state(shared_service)
}

/// Update a product
///
/// Answers with the submitted product, not the stored one.
#[utoipa::path(
    put,
    path = "/update",
    tag = entity::Model::TAG,
    params(UpdateQuery),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated, submitted body echoed", body = Product),
        (status = 400, response = BadRequestErrorResponse),
        (status = 404, description = "No product with this id, submitted body echoed", body = Product),
        (status = 500, description = "Store failure, empty placeholder product", body = Product)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    AppQuery(query): AppQuery<UpdateQuery>,
    AppJson(product): AppJson<Product>,
) -> Response {
    match service.update_product(query.id, product.clone()).await {
        Ok(Some(_)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json(product)).into_response(),
        Err(e) => {
            error!(error = %e, "could not update product");
            (e.status_code(), Json(Product::default())).into_response()
        }
    }
}

/// Create a product
#[utoipa::path(
    post,
    path = "/create",
    tag = entity::Model::TAG,
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = String, content_type = "text/plain", example = "product created"),
        (status = 400, description = "Duplicate id; a malformed body is answered with an `ErrorResponse` instead", body = String, content_type = "text/plain", example = "could not save product"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain", example = "could not save product")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    AppJson(product): AppJson<Product>,
) -> Response {
    info!("adding product");

    match service.create_product(product).await {
        Ok(_) => (StatusCode::CREATED, PRODUCT_CREATED).into_response(),
        Err(e) => {
            error!(error = %e, "{}", PRODUCT_NOT_SAVED);
            (e.status_code(), PRODUCT_NOT_SAVED).into_response()
        }
    }
}

/// List all products
///
/// An empty store is reported as 404 with an empty array.
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>),
        (status = 404, description = "No products stored", body = Vec<Product>, example = json!([])),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Response> {
    match service.products().await? {
        Some(products) if !products.is_empty() => {
            Ok((StatusCode::OK, Json(products)).into_response())
        }
        _ => Ok((StatusCode::NOT_FOUND, Json(Vec::<Product>::new())).into_response()),
    }
}
