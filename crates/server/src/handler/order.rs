use crate::{
    middleware::{
        jwt::{admin_middleware, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{
        AuthUser, DynOrderCommandService, DynOrderQueryService, DynOrderStatsService,
    },
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, UpdateOrderStatusRequest},
        responses::{ApiResponse, MonthlySales, OrderResponse, OrderStatsResponse, TopProduct},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created with its display number", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(auth.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Order listing with user and item detail", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/me",
    responses(
        (status = 200, description = "Authenticated user's orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_my_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_my(auth.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order detail", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Order belongs to another user"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id, auth).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/stats",
    responses(
        (status = 200, description = "Revenue totals, status counts and recent orders", body = ApiResponse<OrderStatsResponse>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order_stats(
    Extension(service): Extension<DynOrderStatsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/dashboard/sales-by-month",
    responses(
        (status = 200, description = "Sales totals for the last 12 calendar months", body = ApiResponse<Vec<MonthlySales>>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_sales_by_month(
    Extension(service): Extension<DynOrderStatsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.sales_by_month().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/dashboard/top-products",
    responses(
        (status = 200, description = "Top products by summed quantity", body = ApiResponse<Vec<TopProduct>>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_top_products(
    Extension(service): Extension<DynOrderStatsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.top_products().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let user_routes = OpenApiRouter::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/me", get(get_my_orders))
        .route("/api/orders/{id}", get(get_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_command_service.clone()))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route("/api/orders/stats", get(get_order_stats))
        .route(
            "/api/orders/dashboard/sales-by-month",
            get(get_sales_by_month),
        )
        .route(
            "/api/orders/dashboard/top-products",
            get(get_top_products),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(app_state.di_container.order_command_service.clone()))
        .layer(Extension(app_state.di_container.order_stats_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    user_routes.merge(admin_routes).with_state(app_state)
}
