//! Domain repositories.
//!
//! Repositories turn the handful of operations the HTTP layer needs into
//! query descriptors and document calls against a store, and copy engine
//! identifiers onto the returned documents.
//!
//! - [`ECommerceRepository`] - the eight order searches, each also reachable
//!   through [`SearchIntent`]
//! - [`ProductRepository`] - product create, read, update and delete

mod config;
mod ecommerce;
mod intent;
mod product;

pub use config::{
    DEFAULT_ECOMMERCE_INDEX, DEFAULT_PRODUCTS_INDEX, ECommerceFields, RepositoryConfig,
    WindowConfig,
};
pub use ecommerce::ECommerceRepository;
pub use intent::{FUZZY_EDIT_DISTANCE, SearchIntent};
pub use product::ProductRepository;
