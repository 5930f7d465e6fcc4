//! Axum extractors that report failures through the API error envelope.
//!
//! - [`ApiJson`] - Typed JSON request body
//! - [`ApiQuery`] - Typed query string parameters

mod json;
mod query;

pub use json::ApiJson;
pub use query::ApiQuery;
