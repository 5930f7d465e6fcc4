//! # storefront-rest - HTTP API for e-commerce search
//!
//! This crate exposes the Storefront order searches and the product catalog
//! over HTTP. Every request is translated into a call on one of the
//! repositories from `storefront-persistence`, which in turn runs against
//! Elasticsearch (or the in-memory backend in tests).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront_persistence::backends::memory::MemoryBackend;
//! use storefront_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let addr = config.socket_addr();
//!     let app = create_app_with_config(MemoryBackend::new(), config);
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | term search | GET | `/api/ecommerce/term?customer_first_name=` |
//! | terms search | POST | `/api/ecommerce/terms` |
//! | prefix search | GET | `/api/ecommerce/prefix?customer_full_name=` |
//! | range search | GET | `/api/ecommerce/range?from_price=&to_price=` |
//! | match all | GET | `/api/ecommerce/match-all` |
//! | pagination | GET | `/api/ecommerce/pagination?page=&page_size=` |
//! | wildcard search | GET | `/api/ecommerce/wildcard?customer_full_name=` |
//! | fuzzy search | GET | `/api/ecommerce/fuzzy?customer_name=` |
//! | create product | POST | `/api/products` |
//! | list products | GET | `/api/products` |
//! | update product | PUT | `/api/products` |
//! | read product | GET | `/api/products/{id}` |
//! | delete product | DELETE | `/api/products/{id}` |
//!
//! ## Response Envelope
//!
//! Successful responses carry their payload under `data`; failures carry
//! one or more messages under `errors`:
//!
//! ```json
//! {"data": [{"id": "sZ9...", "customer_first_name": "Eddie", ...}]}
//! {"errors": ["Bad request: Invalid pagination request: page must be at least 1"]}
//! ```
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Invalid parameters or body |
//! | 404 | Product not found |
//! | 502 | Elasticsearch rejected the query or the credentials |
//! | 503 | Elasticsearch unreachable |
//! | 500 | Unreadable documents, internal failures |
//!
//! ## Configuration
//!
//! The server is configured via command-line flags or environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STOREFRONT_SERVER_PORT` | 8080 | Server port |
//! | `STOREFRONT_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `STOREFRONT_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `STOREFRONT_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `STOREFRONT_ENABLE_CORS` | true | Enable CORS |
//! | `STOREFRONT_STORAGE_BACKEND` | elasticsearch | `elasticsearch` or `memory` |
//! | `STOREFRONT_ELASTICSEARCH_NODES` | http://localhost:9200 | Comma-separated node URLs |
//! | `STOREFRONT_ECOMMERCE_INDEX` | kibana_sample_data_ecommerce | Order index |
//! | `STOREFRONT_PRODUCTS_INDEX` | products | Product index |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, repositories, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors with envelope-shaped rejections
//! - [`responses`] - The response envelope
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use storefront_persistence::core::{Backend, DocumentStorage, SearchProvider};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: SearchProvider + DocumentStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up every route together with tracing, the request timeout and,
/// when enabled, CORS.
///
/// # Example
///
/// ```rust
/// use storefront_persistence::backends::memory::MemoryBackend;
/// use storefront_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     enable_cors: true,
///     ..ServerConfig::for_testing()
/// };
/// let _app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: SearchProvider + DocumentStorage + Send + Sync + 'static,
{
    info!(
        backend = storage.name(),
        ecommerce_index = %config.ecommerce_index,
        products_index = %config.products_index,
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence; otherwise both Storefront crates log at
/// `level`. Call once at startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "storefront={level},storefront_rest={level},storefront_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
