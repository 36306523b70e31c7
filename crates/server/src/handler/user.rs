use crate::{
    middleware::jwt::{admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{Extension, Json, extract::Query, http::StatusCode, middleware, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::DynUserQueryService,
    domain::{
        requests::FindAllUsers,
        responses::{ApiResponse, UserResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users",
    params(FindAllUsers),
    responses(
        (status = 200, description = "User listing", body = ApiResponse<Vec<UserResponse>>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
    Query(params): Query<FindAllUsers>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .with_state(app_state)
}
