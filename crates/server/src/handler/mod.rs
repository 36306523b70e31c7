mod auth;
mod order;
mod product;
mod user;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::user::user_routes;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,

        user::get_users,

        product::get_products,
        product::get_all_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::create_order,
        order::get_orders,
        order::get_my_orders,
        order::get_order,
        order::update_order_status,
        order::get_order_stats,
        order::get_sales_by_month,
        order::get_top_products,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Accounts and authentication"),
        (name = "Products", description = "Product catalog"),
        (name = "Orders", description = "Orders, status and dashboards"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, upload_dir: &str, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .nest_service("/uploads", ServeDir::new(upload_dir))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server terminated unexpectedly")?;

        Ok(())
    }
}
