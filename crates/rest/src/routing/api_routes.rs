//! Storefront route configuration.
//!
//! Defines all routes for the search API.

use axum::{
    Router,
    routing::{get, post},
};
use storefront_persistence::core::{DocumentStorage, SearchProvider};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Orders
/// - `GET /api/ecommerce/term` - Exact first name
/// - `POST /api/ecommerce/terms` - Any of several first names
/// - `GET /api/ecommerce/prefix` - Full name prefix
/// - `GET /api/ecommerce/range` - Total price range
/// - `GET /api/ecommerce/match-all` - Every order
/// - `GET /api/ecommerce/pagination` - One page of orders
/// - `GET /api/ecommerce/wildcard` - Full name pattern
/// - `GET /api/ecommerce/fuzzy` - Approximate first name
///
/// ## Products
/// - `POST /api/products` - Create
/// - `GET /api/products` - List
/// - `PUT /api/products` - Update
/// - `GET /api/products/{id}` - Read
/// - `DELETE /api/products/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SearchProvider + DocumentStorage + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Order searches
        .route("/api/ecommerce/term", get(handlers::term_handler::<S>))
        .route("/api/ecommerce/terms", post(handlers::terms_handler::<S>))
        .route("/api/ecommerce/prefix", get(handlers::prefix_handler::<S>))
        .route("/api/ecommerce/range", get(handlers::range_handler::<S>))
        .route(
            "/api/ecommerce/match-all",
            get(handlers::match_all_handler::<S>),
        )
        .route(
            "/api/ecommerce/pagination",
            get(handlers::pagination_handler::<S>),
        )
        .route(
            "/api/ecommerce/wildcard",
            get(handlers::wildcard_handler::<S>),
        )
        .route("/api/ecommerce/fuzzy", get(handlers::fuzzy_handler::<S>))
        // Product catalog
        .route(
            "/api/products",
            post(handlers::create_product_handler::<S>)
                .get(handlers::list_products_handler::<S>)
                .put(handlers::update_product_handler::<S>),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product_handler::<S>).delete(handlers::delete_product_handler::<S>),
        )
        // State
        .with_state(state)
}
