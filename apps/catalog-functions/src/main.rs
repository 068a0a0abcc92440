use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(database = config.mongodb.database(), "Connecting to MongoDB");

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let functions = api::functions(&state).await?;

    let router = axum_helpers::create_router::<openapi::ApiDoc>(functions, &state.config.server)?;

    // Health endpoints stay outside the concurrency limit
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!(
        max_concurrent_requests = state.config.server.max_concurrent_requests,
        "Starting catalog functions"
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog functions shutdown complete");
    Ok(())
}
