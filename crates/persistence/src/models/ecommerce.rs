//! E-commerce order documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Identified;

/// One order in the e-commerce sample index.
///
/// `id` is never read from the engine's `_source`; it is copied from the hit
/// metadata by the repository after every search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ECommerce {
    /// Engine-assigned document identifier.
    #[serde(default, skip_deserializing)]
    pub id: String,

    /// Customer first name.
    #[serde(default)]
    pub customer_first_name: String,

    /// Customer last name.
    #[serde(default)]
    pub customer_last_name: String,

    /// Customer full name.
    #[serde(default)]
    pub customer_full_name: String,

    /// Customer gender as stored in the index (e.g. `MALE`).
    #[serde(default)]
    pub customer_gender: String,

    /// Order total including tax.
    #[serde(default)]
    pub taxful_total_price: f64,

    /// Product categories in the order.
    #[serde(default)]
    pub category: Vec<String>,

    /// Order number.
    #[serde(default)]
    pub order_id: Option<i64>,

    /// Order timestamp.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,

    /// Ordered products.
    #[serde(default)]
    pub products: Vec<ECommerceProduct>,
}

/// A product line inside an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ECommerceProduct {
    /// Product number.
    #[serde(default)]
    pub product_id: i64,

    /// Product name.
    #[serde(default)]
    pub product_name: String,
}

impl Identified for ECommerce {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
