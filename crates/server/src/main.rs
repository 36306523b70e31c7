use anyhow::{Context, Result};
use dotenv::dotenv;
use server::handler::AppRouter;
use shared::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to create connection pool")?;

    if config.run_migrations {
        ConnectionManager::run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
        info!("✅ Migrations applied");
    }

    let state = AppState::new(pool, &config).context("Failed to create AppState")?;

    AppRouter::serve(config.port, &config.upload_dir, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
