//! Backend abstraction for search engine clients.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Remote Elasticsearch cluster.
    Elasticsearch,
    /// In-process engine evaluating query descriptors over JSON documents.
    Memory,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Elasticsearch => write!(f, "elasticsearch"),
            BackendKind::Memory => write!(f, "memory"),
        }
    }
}

/// Common surface of every search backend.
///
/// Implementations own their connection configuration and are shared
/// read-only (behind an `Arc`) by all concurrent callers.
#[async_trait]
pub trait Backend: Debug + Send + Sync {
    /// Returns the kind of this backend.
    fn kind(&self) -> BackendKind;

    /// Returns a short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Verifies that the backend is reachable and healthy.
    async fn health_check(&self) -> Result<(), BackendError>;
}
