//! HTTP request handlers.
//!
//! - [`ecommerce`] - The eight order searches
//! - [`products`] - Product create, read, update and delete
//! - [`health`] - Health check endpoints

pub mod ecommerce;
pub mod health;
pub mod products;

// Re-export handlers for convenience
pub use ecommerce::{
    fuzzy_handler, match_all_handler, pagination_handler, prefix_handler, range_handler,
    term_handler, terms_handler, wildcard_handler,
};
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
