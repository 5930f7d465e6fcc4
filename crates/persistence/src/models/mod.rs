//! Document models stored in the search engine.

mod ecommerce;
mod product;

pub use ecommerce::{ECommerce, ECommerceProduct};
pub use product::{Color, Product, ProductCreateDto, ProductFeature, ProductUpdateDto};
