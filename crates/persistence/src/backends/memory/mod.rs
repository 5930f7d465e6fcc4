//! In-memory backend implementation.
//!
//! Holds `_source` documents per index inside the process and evaluates
//! query descriptors with the same operator semantics the Elasticsearch
//! backend gets from the engine. Used by the test suites and by the server's
//! `memory` backend mode.

mod backend;
mod matcher;

pub use backend::{DEFAULT_WINDOW_SIZE, MemoryBackend};
#[cfg(test)]
pub(crate) use matcher::edit_distance;
