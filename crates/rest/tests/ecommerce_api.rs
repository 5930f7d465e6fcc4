//! Order search endpoint tests.
//!
//! Runs each of the eight searches through the full router over the seeded
//! in-memory backend and checks both the selected orders and the envelope.

mod common;

use axum::http::StatusCode;
use common::{create_test_server, first_error, ids, server_with};
use serde_json::{Value, json};
use storefront_rest::ServerConfig;

// =============================================================================
// Searches
// =============================================================================

mod searches {
    use super::*;

    #[tokio::test]
    async fn test_term_matches_first_name_ignoring_case() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/term")
            .add_query_param("customer_first_name", "eddie")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec!["o1", "o4"]);
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_terms_matches_any_listed_name() {
        let (server, _backend) = create_test_server();

        let response = server
            .post("/api/ecommerce/terms")
            .json(&json!(["Mary", "Gwen"]))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec!["o2", "o3"]);
    }

    #[tokio::test]
    async fn test_prefix_matches_full_name_start() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/prefix")
            .add_query_param("customer_full_name", "Edd")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec!["o1", "o5", "o7"]);
    }

    #[tokio::test]
    async fn test_range_is_inclusive() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/range")
            .add_query_param("from_price", "50")
            .add_query_param("to_price", "80")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec!["o2", "o4", "o6"]);
        for order in body["data"].as_array().unwrap() {
            let price = order["taxful_total_price"].as_f64().unwrap();
            assert!((50.0..=80.0).contains(&price));
        }
    }

    #[tokio::test]
    async fn test_match_all_returns_every_order_with_ids() {
        let (server, _backend) = create_test_server();

        let response = server.get("/api/ecommerce/match-all").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body).len(), 7);
        assert_eq!(body["data"][0]["customer_full_name"], "Eddie Underwood");
    }

    #[tokio::test]
    async fn test_pagination_walks_match_all_order() {
        let (server, _backend) = create_test_server();

        let all: Value = server.get("/api/ecommerce/match-all").await.json();
        let all = ids(&all);

        let mut paged = Vec::new();
        for page in 1..=3 {
            let response = server
                .get("/api/ecommerce/pagination")
                .add_query_param("page", page)
                .add_query_param("page_size", 3)
                .await;
            response.assert_status_ok();
            paged.extend(ids(&response.json::<Value>()));
        }

        assert_eq!(paged, all);
    }

    #[tokio::test]
    async fn test_pagination_past_the_end_is_empty() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/pagination")
            .add_query_param("page", 10)
            .add_query_param("page_size", 3)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_wildcard_matches_pattern() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/wildcard")
            .add_query_param("customer_full_name", "*B*er")
            .await;

        response.assert_status_ok();
        assert_eq!(ids(&response.json::<Value>()), vec!["o3"]);
    }

    #[tokio::test]
    async fn test_fuzzy_is_ranked_by_price_descending() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/fuzzy")
            .add_query_param("customer_name", "Eddie")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec!["o5", "o1", "o7"]);
    }

    #[tokio::test]
    async fn test_configured_window_caps_results() {
        let config = ServerConfig {
            match_all_window_size: Some(2),
            ..ServerConfig::for_testing()
        };
        let (server, _backend) = server_with(common::seeded_backend(), config);

        let body: Value = server.get("/api/ecommerce/match-all").await.json();
        assert_eq!(ids(&body), vec!["o1", "o2"]);
    }
}

// =============================================================================
// Rejected requests
// =============================================================================

mod rejections {
    use super::*;

    #[tokio::test]
    async fn test_empty_terms_list_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server.post("/api/ecommerce/terms").json(&json!([])).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let message = first_error(&response.json());
        assert!(message.contains("at least one value is required"), "{}", message);
    }

    #[tokio::test]
    async fn test_terms_without_json_body_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server.post("/api/ecommerce/terms").text("Mary").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(first_error(&response.json()).contains("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_inverted_range_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/range")
            .add_query_param("from_price", "80")
            .add_query_param("to_price", "50")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(first_error(&response.json()).contains("greater than upper bound"));
    }

    #[tokio::test]
    async fn test_page_zero_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/pagination")
            .add_query_param("page", 0)
            .add_query_param("page_size", 3)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(first_error(&response.json()).contains("page must be at least 1"));
    }

    #[tokio::test]
    async fn test_missing_query_parameter_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/pagination")
            .add_query_param("page", 1)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let message = first_error(&response.json());
        assert!(message.contains("Invalid query parameters"), "{}", message);
        assert!(message.contains("page_size"), "{}", message);
    }

    #[tokio::test]
    async fn test_non_numeric_price_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/range")
            .add_query_param("from_price", "cheap")
            .add_query_param("to_price", "50")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_term_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server
            .get("/api/ecommerce/term")
            .add_query_param("customer_first_name", "  ")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unreachable_engine_returns_503() {
        let (server, _backend) =
            server_with(common::UnreachableBackend, ServerConfig::for_testing());

        let response = server.get("/api/ecommerce/match-all").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(first_error(&response.json()).contains("connection refused"));
    }
}
