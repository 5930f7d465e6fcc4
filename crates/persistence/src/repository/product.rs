//! Catalog product repository.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::{DocumentStorage, SearchProvider};
use crate::error::{ResourceError, StorageError, StorageResult};
use crate::models::{Product, ProductCreateDto, ProductUpdateDto};
use crate::types::QueryDescriptor;

use super::config::DEFAULT_PRODUCTS_INDEX;

/// CRUD operations over the products index.
#[derive(Debug)]
pub struct ProductRepository<S> {
    store: Arc<S>,
    index: String,
    list_size: Option<u32>,
}

impl<S> Clone for ProductRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            index: self.index.clone(),
            list_size: self.list_size,
        }
    }
}

impl<S> ProductRepository<S>
where
    S: SearchProvider + DocumentStorage,
{
    /// Creates a repository over `index`.
    pub fn new(store: Arc<S>, index: impl Into<String>) -> Self {
        Self {
            store,
            index: index.into(),
            list_size: None,
        }
    }

    /// Creates a repository over the default `products` index.
    pub fn with_default_index(store: Arc<S>) -> Self {
        Self::new(store, DEFAULT_PRODUCTS_INDEX)
    }

    /// Caps the number of products returned by [`get_all`](Self::get_all).
    pub fn with_list_size(mut self, size: u32) -> Self {
        self.list_size = Some(size);
        self
    }

    /// Returns the target index name.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Stores a new product under a fresh UUID.
    pub async fn save(&self, dto: ProductCreateDto) -> StorageResult<Product> {
        dto.validate()?;

        let product = dto.into_product(Uuid::new_v4().to_string(), Utc::now());
        self.store
            .index_document(&self.index, &product.id, &product)
            .await?;

        tracing::info!(index = %self.index, id = %product.id, "Saved product");
        Ok(product)
    }

    /// Every product in the index, in engine order.
    pub async fn get_all(&self) -> StorageResult<Vec<Product>> {
        let descriptor = QueryDescriptor::match_all().with_size(self.list_size);
        let result = self
            .store
            .search::<Product>(&self.index, &descriptor)
            .await?;
        Ok(result.into_identified())
    }

    /// Looks up a product by id.
    pub async fn get_by_id(&self, id: &str) -> StorageResult<Option<Product>> {
        let hit = self.store.get_document::<Product>(&self.index, id).await?;
        Ok(hit.map(|hit| hit.into_identified()))
    }

    /// Replaces an existing product, keeping its creation time.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no product has the given id
    pub async fn update(&self, dto: ProductUpdateDto) -> StorageResult<Product> {
        dto.validate()?;

        let current = self
            .get_by_id(&dto.id)
            .await?
            .ok_or_else(|| self.not_found(&dto.id))?;

        let product = dto.apply_to(current, Utc::now());
        self.store
            .index_document(&self.index, &product.id, &product)
            .await?;

        tracing::info!(index = %self.index, id = %product.id, "Updated product");
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no product has the given id
    pub async fn delete(&self, id: &str) -> StorageResult<()> {
        self.store.delete_document(&self.index, id).await?;
        tracing::info!(index = %self.index, id, "Deleted product");
        Ok(())
    }

    fn not_found(&self, id: &str) -> StorageError {
        StorageError::Resource(ResourceError::NotFound {
            index: self.index.clone(),
            id: id.to_string(),
        })
    }
}
