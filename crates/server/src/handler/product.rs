use crate::{
    middleware::jwt::{admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService, UploadedFile},
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::HttpError,
    model::ProductCategory,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

/// Collects the product fields and the optional image out of a multipart
/// body. Unknown parts are ignored; an empty image part counts as absent.
async fn parse_product_form(
    mut multipart: Multipart,
) -> Result<(CreateProductRequest, Option<UploadedFile>), HttpError> {
    let mut name = None;
    let mut description = None;
    let mut price = None;
    let mut pages = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);

        match field_name.as_deref() {
            Some("image") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Failed to read upload: {e}")))?;
                if !bytes.is_empty() {
                    image = Some(UploadedFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            Some(text_field) => {
                let text_field = text_field.to_string();
                let value = field
                    .text()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Malformed field: {e}")))?;

                match text_field.as_str() {
                    "name" => name = Some(value),
                    "description" => description = Some(value),
                    "price" => {
                        price = Some(value.parse::<i64>().map_err(|_| {
                            HttpError::BadRequest("price must be an integer".into())
                        })?);
                    }
                    "pages" => {
                        pages = Some(value.parse::<i32>().map_err(|_| {
                            HttpError::BadRequest("pages must be an integer".into())
                        })?);
                    }
                    "category" => {
                        category =
                            Some(value.parse::<ProductCategory>().map_err(HttpError::BadRequest)?);
                    }
                    _ => {}
                }
            }
            None => {}
        }
    }

    let req = CreateProductRequest {
        name: name.ok_or_else(|| HttpError::BadRequest("name is required".into()))?,
        description: description
            .ok_or_else(|| HttpError::BadRequest("description is required".into()))?,
        price: price.ok_or_else(|| HttpError::BadRequest("price is required".into()))?,
        pages: pages.ok_or_else(|| HttpError::BadRequest("pages is required".into()))?,
        category: category.ok_or_else(|| HttpError::BadRequest("category is required".into()))?,
    };

    req.validate()
        .map_err(|e| HttpError::BadRequest(format!("Validation failed: {e}")))?;

    Ok((req, image))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Paginated product listing", body = ApiResponsePagination<Vec<ProductResponse>>)
    ),
    tag = "Products"
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/all",
    responses(
        (status = 200, description = "Full product listing, newest first", body = ApiResponse<Vec<ProductResponse>>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn get_all_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all_unpaged().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (req, image) = parse_product_form(multipart).await?;
    let response = service.create(&req, image).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (req, image) = parse_product_form(multipart).await?;
    let req = UpdateProductRequest {
        id,
        name: req.name,
        description: req.description,
        price: req.price,
        pages: req.pages,
        category: req.category,
    };
    let response = service.update(&req, image).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query_service.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/products/all", get(get_all_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_query_service.clone()))
        .layer(Extension(app_state.di_container.product_command_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes).with_state(app_state)
}
