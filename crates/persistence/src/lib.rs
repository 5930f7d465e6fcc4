//! Storefront Search Persistence Layer
//!
//! This crate provides the query layer behind the Storefront search service:
//! a small set of high-level e-commerce searches translated into
//! engine-neutral query descriptors and executed against a search engine.
//!
//! # Features
//!
//! - **Search intents**: exact term, multi-value, prefix, numeric range,
//!   match-all, pagination, wildcard and fuzzy-with-ranking searches
//! - **Engine-neutral descriptors**: one clause, an optional result window and
//!   sort directives, translated by each backend
//! - **Id injection**: engine identifiers are copied onto every returned document
//! - **Product catalog**: create, read, update and delete of product documents
//!
//! # Backend Features
//!
//! Available backend features:
//! - `elasticsearch` (default) - Elasticsearch over HTTP with basic or bearer auth
//!
//! The in-memory backend is always available.
//!
//! # Architecture
//!
//! - [`types`] - Query descriptors and result sets
//! - [`error`] - Error types for all operations
//! - [`core`] - Backend traits
//! - [`backends`] - Backend implementations (Elasticsearch, memory)
//! - [`models`] - Documents stored in the engine
//! - [`repository`] - E-commerce searches and product CRUD
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::json;
//! use storefront_persistence::backends::memory::MemoryBackend;
//! use storefront_persistence::repository::{ECommerceRepository, RepositoryConfig};
//!
//! # tokio_test::block_on(async {
//! let backend = MemoryBackend::new();
//! backend.insert(
//!     "kibana_sample_data_ecommerce",
//!     "order-1",
//!     json!({ "customer_first_name": "Eddie", "taxful_total_price": 36.98 }),
//! );
//!
//! let repository = ECommerceRepository::new(Arc::new(backend), RepositoryConfig::default());
//! let orders = repository.term_query("eddie").await.unwrap();
//!
//! assert_eq!(orders.len(), 1);
//! assert_eq!(orders[0].id, "order-1");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod models;
pub mod repository;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{QueryDescriptor, ResultSet};

// Re-export core traits
pub use core::{Backend, BackendKind, DocumentStorage, SearchProvider};

pub use repository::{ECommerceRepository, ProductRepository, RepositoryConfig, SearchIntent};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
