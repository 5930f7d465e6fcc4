//! Core types for the persistence layer.
//!
//! - [`QueryDescriptor`] and its parts describe one engine-neutral search request
//! - [`ResultSet`] and [`SearchHit`] carry the engine's answer
//! - [`Identified`] lets the result set copy hit ids onto documents
//!
//! # Example
//!
//! ```
//! use storefront_persistence::types::{QueryClause, QueryDescriptor, ResultWindow, SortDirective};
//!
//! let query = QueryDescriptor::new(QueryClause::Fuzzy {
//!     field: "customer_first_name.keyword".to_string(),
//!     value: "Edie".to_string(),
//!     fuzziness: 2,
//! })
//! .with_window(ResultWindow::sized(100))
//! .with_sort(SortDirective::desc("taxful_total_price"));
//!
//! assert_eq!(query.clause.operator(), "fuzzy");
//! ```

mod query;
mod result_set;

pub use query::{QueryClause, QueryDescriptor, ResultWindow, SortDirection, SortDirective};
pub use result_set::{Identified, ResultSet, SearchHit};
