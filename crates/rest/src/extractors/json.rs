//! JSON body extractor.
//!
//! Wraps axum's `Json` so malformed bodies produce the API error envelope.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for JSON request bodies.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_rest::extractors::ApiJson;
///
/// async fn terms_handler(ApiJson(names): ApiJson<Vec<String>>) {
///     println!("{} names", names.len());
/// }
/// ```
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                RestError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
            })?;
        Ok(ApiJson(value))
    }
}
