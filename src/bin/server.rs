//! Gateway server binary
//!
//! Run with: cargo run --bin shipment-gateway-server [config.toml]

use shipment_gateway::providers::{HttpRetrievalClient, RetrievalProvider};
use shipment_gateway::{config::GatewayConfig, server::GatewayServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shipment_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration: CLI arg, then GATEWAY_CONFIG, then defaults
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GATEWAY_CONFIG").ok());
    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            GatewayConfig::load(&path)?
        }
        None => GatewayConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Retrieval backend: {}", config.retrieval.base_url);
    tracing::info!("  - RAG index: {}", config.retrieval.backend_id);
    tracing::info!("  - Static assets: {}", config.static_dir.display());

    // Check the retrieval backend
    let retrieval = HttpRetrievalClient::new(&config.retrieval);
    match retrieval.health_check().await {
        Ok(true) => tracing::info!("Retrieval backend is reachable"),
        _ => tracing::warn!(
            "Retrieval backend not reachable at {}; chat requests will fail until it is up",
            config.retrieval.base_url
        ),
    }

    let server = GatewayServer::new(config);
    tracing::info!("Chat endpoint: http://{}/api/chat", server.address());

    server.start().await?;

    Ok(())
}
