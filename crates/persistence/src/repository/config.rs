//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Default name of the e-commerce sample index.
pub const DEFAULT_ECOMMERCE_INDEX: &str = "kibana_sample_data_ecommerce";

/// Default name of the products index.
pub const DEFAULT_PRODUCTS_INDEX: &str = "products";

/// Index fields targeted by each e-commerce search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ECommerceFields {
    /// Unanalyzed first name, used by term, terms and fuzzy searches.
    pub first_name: String,
    /// Unanalyzed full name, used by prefix and wildcard searches.
    pub full_name: String,
    /// Numeric order total, used by range searches and fuzzy ranking.
    pub total_price: String,
}

impl Default for ECommerceFields {
    fn default() -> Self {
        Self {
            first_name: "customer_first_name.keyword".to_string(),
            full_name: "customer_full_name.keyword".to_string(),
            total_price: "taxful_total_price".to_string(),
        }
    }
}

/// Maximum number of hits per search; `None` uses the engine default.
///
/// Pagination is absent because its window is always derived from the
/// requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Exact-term search.
    pub term: Option<u32>,
    /// Multi-value search.
    pub terms: Option<u32>,
    /// Prefix search.
    pub prefix: Option<u32>,
    /// Numeric range search.
    pub range: Option<u32>,
    /// Full scan.
    pub match_all: Option<u32>,
    /// Wildcard search.
    pub wildcard: Option<u32>,
    /// Fuzzy search.
    pub fuzzy: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            term: None,
            terms: Some(100),
            prefix: Some(100),
            range: Some(100),
            match_all: None,
            wildcard: None,
            fuzzy: None,
        }
    }
}

/// Everything an [`ECommerceRepository`](super::ECommerceRepository) needs
/// besides the store handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Target index name.
    pub index: String,
    /// Field mapping.
    pub fields: ECommerceFields,
    /// Per-search window sizes.
    pub windows: WindowConfig,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_ECOMMERCE_INDEX.to_string(),
            fields: ECommerceFields::default(),
            windows: WindowConfig::default(),
        }
    }
}

impl RepositoryConfig {
    /// Default configuration against a different index.
    pub fn for_index(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            ..Default::default()
        }
    }
}
