// Page vitals HTTP server
//
// Serves network timing and full page analysis over HTTP.
// Listens on $PORT, default 3000.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodegen_tools_vitals::server::{AppState, build_router};
use kodegen_tools_vitals::{AnalyzerConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let server_config = ServerConfig::from_env();
    let analyzer_config = AnalyzerConfig::builder()
        .build()
        .context("Invalid analyzer configuration")?;

    let app = build_router(AppState::new(analyzer_config));

    let listener = tokio::net::TcpListener::bind(server_config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", server_config.addr()))?;

    tracing::info!("Starting server on port :{}", server_config.port());
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
