//! Response formatting for the Storefront search API.
//!
//! - [`envelope`] - the `{"data": ..., "errors": [...]}` body and status helpers

pub mod envelope;

pub use envelope::{ApiResponse, created, no_content, ok};
