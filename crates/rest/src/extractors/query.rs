//! Query string extractor.
//!
//! Wraps axum's `Query` so missing or malformed parameters produce the API
//! error envelope.

use axum::{
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for typed query parameters.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_rest::extractors::ApiQuery;
///
/// #[derive(serde::Deserialize)]
/// struct PageParams { page: i64, page_size: i64 }
///
/// async fn page_handler(ApiQuery(params): ApiQuery<PageParams>) {
///     println!("page {}", params.page);
/// }
/// ```
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                RestError::bad_request(format!(
                    "Invalid query parameters: {}",
                    rejection.body_text()
                ))
            })?;
        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct PageParams {
        page: i64,
        page_size: i64,
    }

    async fn extract(uri: &str) -> Result<ApiQuery<PageParams>, RestError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        ApiQuery::<PageParams>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_query() {
        let ApiQuery(params) = extract("/x?page=2&page_size=10").await.unwrap();
        assert_eq!(params.page, 2);
        assert_eq!(params.page_size, 10);
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let err = extract("/x?page=2").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("page_size"));
    }

    #[tokio::test]
    async fn test_non_numeric_parameter_is_bad_request() {
        let err = extract("/x?page=two&page_size=10").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
