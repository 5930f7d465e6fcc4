//! Elasticsearch search query translation.
//!
//! Translates engine-neutral query descriptors into Elasticsearch Query DSL.

pub mod query_builder;
