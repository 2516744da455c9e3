use anyhow::Context;
use clap::Parser;
use swatchsheet_api::{app, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchsheet_api=debug,swatchsheet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let state = AppState::from_config(&config).context("Failed to load reference table")?;
    if let Some(table) = state.table() {
        info!(entries = table.len(), "reference table loaded");
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!("swatchsheet API listening on http://{}", config.bind);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
