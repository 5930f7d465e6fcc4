//! Search provider trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::Backend;
use crate::error::StorageResult;
use crate::types::{QueryDescriptor, ResultSet};

/// Submits query descriptors against a named index.
///
/// This is the only operation the query layer needs from a backend. Failures
/// (transport, authentication, rejected query) are reported as
/// [`StorageError::Backend`](crate::error::StorageError::Backend); an index
/// with no matches yields an empty [`ResultSet`], not an error.
///
/// # Example
///
/// ```ignore
/// use storefront_persistence::core::SearchProvider;
/// use storefront_persistence::types::QueryDescriptor;
///
/// let result = backend
///     .search::<serde_json::Value>("kibana_sample_data_ecommerce", &QueryDescriptor::match_all())
///     .await?;
/// for hit in &result.hits {
///     println!("{} -> {}", hit.id, hit.source);
/// }
/// ```
#[async_trait]
pub trait SearchProvider: Backend {
    /// Executes `query` against `index`, returning hits in engine order.
    async fn search<T>(&self, index: &str, query: &QueryDescriptor) -> StorageResult<ResultSet<T>>
    where
        T: DeserializeOwned + Send + 'static;
}
