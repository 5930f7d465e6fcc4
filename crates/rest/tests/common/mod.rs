//! Common test utilities for REST API testing.
//!
//! Builds an in-process [`TestServer`] over the in-memory backend, seeded with
//! a small set of e-commerce orders.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use storefront_persistence::backends::memory::MemoryBackend;
use storefront_persistence::core::{Backend, BackendKind, DocumentStorage, SearchProvider};
use storefront_persistence::error::{BackendError, StorageResult};
use storefront_persistence::types::{QueryDescriptor, ResultSet, SearchHit};
use storefront_rest::{AppState, ServerConfig};

/// Index the order fixtures are written to.
pub const ECOMMERCE_INDEX: &str = "kibana_sample_data_ecommerce";

/// Order fixtures: id, first name, last name, total price.
pub const ORDERS: [(&str, &str, &str, f64); 7] = [
    ("o1", "Eddie", "Underwood", 36.98),
    ("o2", "Mary", "Bailey", 53.98),
    ("o3", "Gwen", "Butler", 199.98),
    ("o4", "EDDIE", "Weber", 80.0),
    ("o5", "Eddy", "Graham", 120.0),
    ("o6", "Diane", "Chandler", 50.0),
    ("o7", "Eddi", "Lambert", 10.0),
];

/// Builds an order document as it appears in the sample index.
pub fn order(first: &str, last: &str, price: f64) -> Value {
    json!({
        "customer_first_name": first,
        "customer_last_name": last,
        "customer_full_name": format!("{} {}", first, last),
        "customer_gender": "MALE",
        "taxful_total_price": price,
        "category": ["Men's Clothing"],
    })
}

/// Creates a backend holding every fixture order.
pub fn seeded_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    for (id, first, last, price) in ORDERS {
        backend.insert(ECOMMERCE_INDEX, id, order(first, last, price));
    }
    backend
}

/// Creates a test server over `backend` with `config`.
pub fn server_with<S>(backend: S, config: ServerConfig) -> (TestServer, Arc<S>)
where
    S: SearchProvider + DocumentStorage + Send + Sync + 'static,
{
    let backend = Arc::new(backend);
    let state = AppState::new(Arc::clone(&backend), config);
    let app = storefront_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, backend)
}

/// Creates a test server over the seeded in-memory backend.
pub fn create_test_server() -> (TestServer, Arc<MemoryBackend>) {
    server_with(seeded_backend(), ServerConfig::for_testing())
}

/// Extracts the `id` of every element in a `data` array.
pub fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|doc| doc["id"].as_str().expect("id should be a string").to_string())
        .collect()
}

/// Asserts that `body` is a failure envelope and returns its first message.
pub fn first_error(body: &Value) -> String {
    assert!(body.get("data").is_none(), "failure carried data: {}", body);
    body["errors"][0]
        .as_str()
        .expect("errors should hold strings")
        .to_string()
}

/// A backend whose engine is never reachable.
#[derive(Debug, Default)]
pub struct UnreachableBackend;

impl UnreachableBackend {
    fn error() -> BackendError {
        BackendError::Unavailable {
            backend_name: "elasticsearch".to_string(),
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl Backend for UnreachableBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Elasticsearch
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Err(Self::error())
    }
}

#[async_trait]
impl SearchProvider for UnreachableBackend {
    async fn search<T>(&self, _index: &str, _query: &QueryDescriptor) -> StorageResult<ResultSet<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        Err(Self::error().into())
    }
}

#[async_trait]
impl DocumentStorage for UnreachableBackend {
    async fn index_document<T>(&self, _index: &str, _id: &str, _document: &T) -> StorageResult<()>
    where
        T: Serialize + Sync,
    {
        Err(Self::error().into())
    }

    async fn get_document<T>(&self, _index: &str, _id: &str) -> StorageResult<Option<SearchHit<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        Err(Self::error().into())
    }

    async fn delete_document(&self, _index: &str, _id: &str) -> StorageResult<()> {
        Err(Self::error().into())
    }
}
