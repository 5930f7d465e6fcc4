//! E-commerce order search handlers.
//!
//! One handler per search, each mapping its parameters onto the matching
//! [`ECommerceRepository`](storefront_persistence::repository::ECommerceRepository)
//! method and returning the orders in the response envelope.
//!
//! | Method | Path | Parameters |
//! |--------|------|------------|
//! | GET | `/api/ecommerce/term` | `customer_first_name` |
//! | POST | `/api/ecommerce/terms` | JSON array of first names |
//! | GET | `/api/ecommerce/prefix` | `customer_full_name` |
//! | GET | `/api/ecommerce/range` | `from_price`, `to_price` |
//! | GET | `/api/ecommerce/match-all` | |
//! | GET | `/api/ecommerce/pagination` | `page`, `page_size` |
//! | GET | `/api/ecommerce/wildcard` | `customer_full_name` |
//! | GET | `/api/ecommerce/fuzzy` | `customer_name` |

use axum::{extract::State, response::Response};
use serde::Deserialize;
use storefront_persistence::core::{DocumentStorage, SearchProvider};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{ApiJson, ApiQuery};
use crate::responses;
use crate::state::AppState;

/// Query parameters for the exact-term search.
#[derive(Debug, Deserialize)]
pub struct TermParams {
    /// Customer first name.
    pub customer_first_name: String,
}

/// Query parameters for prefix and wildcard searches.
#[derive(Debug, Deserialize)]
pub struct FullNameParams {
    /// Full-name prefix or wildcard pattern.
    pub customer_full_name: String,
}

/// Query parameters for the price range search.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    /// Lowest total (inclusive).
    pub from_price: f64,
    /// Highest total (inclusive).
    pub to_price: f64,
}

/// Query parameters for the paginated scan.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Page number, starting at 1.
    pub page: i64,
    /// Orders per page.
    pub page_size: i64,
}

/// Query parameters for the fuzzy search.
#[derive(Debug, Deserialize)]
pub struct FuzzyParams {
    /// Approximate customer first name.
    pub customer_name: String,
}

/// Handler for `GET /api/ecommerce/term`.
pub async fn term_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<TermParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(customer_first_name = %params.customer_first_name, "Processing term search");
    let orders = state.ecommerce().term_query(&params.customer_first_name).await?;
    Ok(responses::ok(orders))
}

/// Handler for `POST /api/ecommerce/terms`.
pub async fn terms_handler<S>(
    State(state): State<AppState<S>>,
    ApiJson(names): ApiJson<Vec<String>>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(count = names.len(), "Processing terms search");
    let orders = state.ecommerce().terms_query(names).await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/prefix`.
pub async fn prefix_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<FullNameParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(customer_full_name = %params.customer_full_name, "Processing prefix search");
    let orders = state.ecommerce().prefix_query(&params.customer_full_name).await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/range`.
pub async fn range_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(from = params.from_price, to = params.to_price, "Processing range search");
    let orders = state
        .ecommerce()
        .range_query(params.from_price, params.to_price)
        .await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/match-all`.
pub async fn match_all_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!("Processing match-all search");
    let orders = state.ecommerce().match_all_query().await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/pagination`.
pub async fn pagination_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(page = params.page, page_size = params.page_size, "Processing paginated scan");
    let orders = state
        .ecommerce()
        .pagination_query(params.page, params.page_size)
        .await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/wildcard`.
pub async fn wildcard_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<FullNameParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(pattern = %params.customer_full_name, "Processing wildcard search");
    let orders = state
        .ecommerce()
        .wildcard_query(&params.customer_full_name)
        .await?;
    Ok(responses::ok(orders))
}

/// Handler for `GET /api/ecommerce/fuzzy`.
pub async fn fuzzy_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<FuzzyParams>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(customer_name = %params.customer_name, "Processing fuzzy search");
    let orders = state.ecommerce().fuzzy_query(&params.customer_name).await?;
    Ok(responses::ok(orders))
}
