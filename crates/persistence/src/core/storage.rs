//! Document storage trait.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::Backend;
use crate::error::StorageResult;
use crate::types::SearchHit;

/// Single-document write and lookup operations.
///
/// Writes are visible to subsequent searches once the call returns.
#[async_trait]
pub trait DocumentStorage: Backend {
    /// Stores `document` under `id`, replacing any existing document.
    async fn index_document<T>(&self, index: &str, id: &str, document: &T) -> StorageResult<()>
    where
        T: Serialize + Sync;

    /// Fetches a document by id, or `None` if it does not exist.
    async fn get_document<T>(&self, index: &str, id: &str) -> StorageResult<Option<SearchHit<T>>>
    where
        T: DeserializeOwned + Send + 'static;

    /// Deletes a document.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no document has this id
    async fn delete_document(&self, index: &str, id: &str) -> StorageResult<()>;
}
