//! Storefront search server.
//!
//! Serves the e-commerce order searches and the product catalog over HTTP,
//! backed by Elasticsearch or, for local development, an in-memory engine.

use clap::Parser;
use storefront_persistence::core::Backend;
use storefront_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::{info, warn};

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        ecommerce_index = %config.ecommerce_index,
        products_index = %config.products_index,
        "Starting Storefront search server"
    );

    match backend_mode {
        StorageBackendMode::Elasticsearch => start_elasticsearch(config).await?,
        StorageBackendMode::Memory => start_memory(config).await?,
    }

    Ok(())
}

/// Starts the server against an Elasticsearch cluster.
#[cfg(feature = "elasticsearch")]
async fn start_elasticsearch(config: ServerConfig) -> anyhow::Result<()> {
    use storefront_persistence::backends::elasticsearch::ElasticsearchBackend;

    let es_config = config.elasticsearch_config();
    info!(
        nodes = ?es_config.nodes,
        authenticated = es_config.auth.is_some(),
        "Initializing Elasticsearch backend"
    );

    let backend = ElasticsearchBackend::new(es_config)?;

    // An unreachable cluster is reported by /_readiness; keep serving.
    if let Err(e) = backend.health_check().await {
        warn!(error = %e, "Elasticsearch is not reachable yet");
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when elasticsearch feature is not enabled.
#[cfg(not(feature = "elasticsearch"))]
async fn start_elasticsearch(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The elasticsearch backend requires the 'elasticsearch' feature. \
         Build with: cargo build -p storefront-server --features elasticsearch"
    )
}

/// Starts the server with an empty in-memory engine.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    use storefront_persistence::backends::memory::MemoryBackend;

    let backend = MemoryBackend::new();
    warn!(
        backend = backend.name(),
        "Using the in-memory backend; documents are lost on shutdown"
    );

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
