//! Core storage traits and abstractions.
//!
//! - [`Backend`] - identity and health of a search backend
//! - [`SearchProvider`] - submit a query descriptor against an index
//! - [`DocumentStorage`] - single-document index/get/delete
//!
//! ```text
//! Backend
//!     ├── SearchProvider
//!     └── DocumentStorage
//! ```

mod backend;
mod search;
mod storage;

pub use backend::{Backend, BackendKind};
pub use search::SearchProvider;
pub use storage::DocumentStorage;
