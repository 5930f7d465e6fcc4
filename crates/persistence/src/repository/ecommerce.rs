//! E-commerce order search repository.

use std::sync::Arc;

use crate::core::SearchProvider;
use crate::error::StorageResult;
use crate::models::ECommerce;

use super::config::RepositoryConfig;
use super::intent::SearchIntent;

/// Search operations over the e-commerce order index.
///
/// Each method validates its input, builds one query descriptor, submits it
/// to the store and returns the matched orders in engine order with their
/// `id` copied from the hit metadata. Store errors are returned unchanged.
#[derive(Debug)]
pub struct ECommerceRepository<S> {
    store: Arc<S>,
    config: Arc<RepositoryConfig>,
}

impl<S> Clone for ECommerceRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: SearchProvider> ECommerceRepository<S> {
    /// Creates a repository over `store`.
    pub fn new(store: Arc<S>, config: RepositoryConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the repository configuration.
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Runs any search intent.
    pub async fn search(&self, intent: SearchIntent) -> StorageResult<Vec<ECommerce>> {
        let descriptor = intent.to_descriptor(&self.config.fields, &self.config.windows)?;

        tracing::debug!(
            intent = intent.name(),
            index = %self.config.index,
            "Running e-commerce search"
        );

        let result = self
            .store
            .search::<ECommerce>(&self.config.index, &descriptor)
            .await?;
        Ok(result.into_identified())
    }

    /// Orders whose customer first name equals `first_name`, ignoring case.
    pub async fn term_query(&self, first_name: &str) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Term {
            value: first_name.to_string(),
        })
        .await
    }

    /// Orders whose customer first name is any of `names`.
    pub async fn terms_query(&self, names: Vec<String>) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Terms { values: names }).await
    }

    /// Orders whose customer full name starts with `full_name`.
    pub async fn prefix_query(&self, full_name: &str) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Prefix {
            prefix: full_name.to_string(),
        })
        .await
    }

    /// Orders with `from <= taxful_total_price <= to`.
    pub async fn range_query(&self, from: f64, to: f64) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Range { from, to }).await
    }

    /// Every order, within the engine's default window.
    pub async fn match_all_query(&self) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::MatchAll).await
    }

    /// Page `page` (1-based) of every order.
    pub async fn pagination_query(&self, page: i64, page_size: i64) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Page { page, page_size }).await
    }

    /// Orders whose customer full name matches a `*` / `?` pattern.
    pub async fn wildcard_query(&self, pattern: &str) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Wildcard {
            pattern: pattern.to_string(),
        })
        .await
    }

    /// Orders whose customer first name is close to `name`, most expensive first.
    pub async fn fuzzy_query(&self, name: &str) -> StorageResult<Vec<ECommerce>> {
        self.search(SearchIntent::Fuzzy {
            value: name.to_string(),
        })
        .await
    }
}
