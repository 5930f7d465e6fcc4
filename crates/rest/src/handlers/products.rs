//! Product catalog handlers.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | POST | `/api/products` | `201 Created` with the stored product |
//! | GET | `/api/products` | `200 OK` with every product |
//! | GET | `/api/products/{id}` | `200 OK` or `404 Not Found` |
//! | PUT | `/api/products` | `204 No Content` or `404 Not Found` |
//! | DELETE | `/api/products/{id}` | `204 No Content` or `404 Not Found` |

use axum::{
    extract::{Path, State},
    response::Response,
};
use storefront_persistence::core::{DocumentStorage, SearchProvider};
use storefront_persistence::models::{ProductCreateDto, ProductUpdateDto};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ApiJson;
use crate::responses;
use crate::state::AppState;

/// Handler for `POST /api/products`.
pub async fn create_product_handler<S>(
    State(state): State<AppState<S>>,
    ApiJson(dto): ApiJson<ProductCreateDto>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(name = %dto.name, "Processing product create");
    let product = state.products().save(dto).await?;
    let location = format!("/api/products/{}", product.id);
    Ok(responses::created(product, &location))
}

/// Handler for `GET /api/products`.
pub async fn list_products_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!("Processing product listing");
    let products = state.products().get_all().await?;
    Ok(responses::ok(products))
}

/// Handler for `GET /api/products/{id}`.
pub async fn get_product_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(id = %id, "Processing product read");
    match state.products().get_by_id(&id).await? {
        Some(product) => Ok(responses::ok(product)),
        None => Err(RestError::NotFound {
            index: state.products().index().to_string(),
            id,
        }),
    }
}

/// Handler for `PUT /api/products`.
pub async fn update_product_handler<S>(
    State(state): State<AppState<S>>,
    ApiJson(dto): ApiJson<ProductUpdateDto>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(id = %dto.id, "Processing product update");
    state.products().update(dto).await?;
    Ok(responses::no_content())
}

/// Handler for `DELETE /api/products/{id}`.
pub async fn delete_product_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: SearchProvider + DocumentStorage + Send + Sync,
{
    debug!(id = %id, "Processing product delete");
    state.products().delete(&id).await?;
    Ok(responses::no_content())
}
