//! Elasticsearch backend implementation.
//!
//! An authenticated handle to a remote Elasticsearch cluster implementing
//! [`SearchProvider`](crate::core::SearchProvider) and
//! [`DocumentStorage`](crate::core::DocumentStorage).
//!
//! Query descriptors are translated by
//! [`EsQueryBuilder`](search::query_builder::EsQueryBuilder) into Query DSL and
//! sent to `POST /{index}/_search`. Hits come back in engine order with their
//! `_id`, `_score` and typed `_source`.
//!
//! Index mappings are not managed here; indices are expected to exist (or are
//! created implicitly by Elasticsearch on first write).
//!
//! # Example
//!
//! ```ignore
//! use storefront_persistence::backends::elasticsearch::{
//!     ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig,
//! };
//!
//! let config = ElasticsearchConfig {
//!     nodes: vec!["https://localhost:9200".to_string()],
//!     auth: Some(ElasticsearchAuth::Basic {
//!         username: "elastic".to_string(),
//!         password: "changeme".to_string(),
//!     }),
//!     ..Default::default()
//! };
//! let backend = ElasticsearchBackend::new(config)?;
//! ```

mod backend;
pub mod search;
mod search_impl;
mod storage;

pub use backend::{ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig};
