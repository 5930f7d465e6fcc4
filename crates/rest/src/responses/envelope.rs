//! The JSON envelope wrapped around every API response.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response body shared by every endpoint.
///
/// Successful responses carry `data` and omit `errors`; failed responses
/// carry `errors` and omit `data`.
///
/// ```json
/// { "data": [ { "id": "abc", "customer_first_name": "Eddie" } ] }
/// { "errors": [ "Bad request: page must be at least 1" ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error messages on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// A failed response.
    pub fn failure(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    /// Returns true if no errors were reported.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// `200 OK` with `data` in the envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// `201 Created` with `data` in the envelope and a `Location` header.
pub fn created<T: Serialize>(data: T, location: &str) -> Response {
    let mut response = (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

/// `204 No Content`.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_errors() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(body, json!({ "data": [1, 2] }));
    }

    #[test]
    fn test_failure_omits_data() {
        let body =
            serde_json::to_value(ApiResponse::<()>::failure(vec!["boom".to_string()])).unwrap();
        assert_eq!(body, json!({ "errors": ["boom"] }));
    }

    #[test]
    fn test_empty_list_is_still_data() {
        let body = serde_json::to_value(ApiResponse::success(Vec::<u8>::new())).unwrap();
        assert_eq!(body, json!({ "data": [] }));
    }

    #[test]
    fn test_created_sets_location() {
        let response = created(json!({ "id": "p1" }), "/api/products/p1");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/products/p1"
        );
    }
}
