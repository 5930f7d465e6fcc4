//! Search engine backend implementations.
//!
//! This module contains implementations of the storage traits for the
//! supported engines. Remote engines are gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Elasticsearch | `elasticsearch` | Remote cluster over HTTP, the production backend |
//! | Memory | (always) | Process-local index, great for tests and demos |
//!
//! # Example
//!
//! ```no_run
//! use storefront_persistence::backends::memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new();
//! ```

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

pub mod memory;
