//! Application state for the Storefront search API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the search engine handle, the repositories built on top of
//! it, and the server configuration.

use std::sync::Arc;

use storefront_persistence::core::{DocumentStorage, SearchProvider};
use storefront_persistence::repository::{ECommerceRepository, ProductRepository};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The search engine backend (must implement [`SearchProvider`] and
///   [`DocumentStorage`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_persistence::backends::memory::MemoryBackend;
/// use storefront_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::for_testing());
/// assert_eq!(state.ecommerce().config().index, "kibana_sample_data_ecommerce");
/// ```
pub struct AppState<S> {
    /// The search engine backend.
    storage: Arc<S>,

    /// E-commerce order searches.
    ecommerce: ECommerceRepository<S>,

    /// Product catalog.
    products: ProductRepository<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            ecommerce: self.ecommerce.clone(),
            products: self.products.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S>
where
    S: SearchProvider + DocumentStorage,
{
    /// Creates a new AppState with the given storage and configuration.
    ///
    /// # Arguments
    ///
    /// * `storage` - The search engine backend (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        let ecommerce = ECommerceRepository::new(Arc::clone(&storage), config.repository_config());

        let mut products = ProductRepository::new(Arc::clone(&storage), config.products_index.clone());
        if let Some(size) = config.products_list_size {
            products = products.with_list_size(size);
        }

        Self {
            storage,
            ecommerce,
            products,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the e-commerce repository.
    pub fn ecommerce(&self) -> &ECommerceRepository<S> {
        &self.ecommerce
    }

    /// Returns the product repository.
    pub fn products(&self) -> &ProductRepository<S> {
        &self.products
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_persistence::backends::memory::MemoryBackend;
    use storefront_persistence::core::Backend;

    #[test]
    fn test_state_wires_configured_indices() {
        let config = ServerConfig {
            ecommerce_index: "orders".to_string(),
            products_index: "catalog".to_string(),
            ..ServerConfig::for_testing()
        };
        let state = AppState::new(Arc::new(MemoryBackend::new()), config);

        assert_eq!(state.ecommerce().config().index, "orders");
        assert_eq!(state.products().index(), "catalog");
        assert_eq!(state.storage().name(), "memory");
    }

    #[test]
    fn test_state_clone_shares_storage() {
        let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::for_testing());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.storage(), cloned.storage()));
    }
}
