use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::storage::build_object_store;
use profile_api::config::AppConfig;
use profile_api::database::init_db;
use profile_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let db = init_db(&config.database.url)
        .await
        .context("failed to initialize database")?;
    let object_store = build_object_store(&config.storage)
        .await
        .context("failed to initialize object storage")?;
    info!(backend = ?config.storage.backend, "object storage ready");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        db,
        object_store,
        config,
    };
    let app = profile_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
