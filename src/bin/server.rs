//! Customer profiler agent server

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower::Layer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use profiler_agent::{
    config::ServerConfig,
    extract::IdeaExtractor,
    generate::GeminiGenerator,
    layer::RequestLoggingLayer,
    protocol::agent::profiler_card,
    service::Dispatcher,
    transport::{self, RpcService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let generator = GeminiGenerator::new(&config.api_key)?;
    let dispatcher = Dispatcher::new(Arc::new(generator), IdeaExtractor::default());
    let rpc = RpcService::new(RequestLoggingLayer::new().layer(dispatcher));

    let endpoint = format!("http://localhost:{}/a2a/profiler", config.port)
        .parse()
        .context("invalid endpoint url")?;
    let app = transport::router(rpc, profiler_card(endpoint));

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    info!("customer profiler agent starting on port {}", config.port);
    info!(
        "agent card available at: http://localhost:{}/.well-known/agent.json",
        config.port
    );
    info!(
        "A2A endpoint available at: http://localhost:{}/a2a/profiler",
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
