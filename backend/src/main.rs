use anyhow::Context;
use farm_dashboard_backend::{config, create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_directory = config::data_directory()?;
    info!("Using data directory {:?}", data_directory);

    let farm_config = config::FarmConfig::load_or_create(&data_directory)?;
    let app_state = initialize_backend(&data_directory, &farm_config)?;
    let app = create_router(app_state, &farm_config)?;

    let listener = tokio::net::TcpListener::bind(&farm_config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", farm_config.bind_address))?;
    info!("Server listening on {}", farm_config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
