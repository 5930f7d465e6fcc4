//! SearchProvider implementation for the Elasticsearch backend.

use async_trait::async_trait;
use elasticsearch::SearchParts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::SearchProvider;
use crate::error::StorageResult;
use crate::types::{QueryDescriptor, ResultSet, SearchHit};

use super::backend::{ElasticsearchBackend, decode_error, ensure_success, transport_error};
use super::search::query_builder::EsQueryBuilder;

/// The parts of a `_search` response the query layer reads.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct EsSearchResponse<T> {
    pub hits: EsHits<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct EsHits<T> {
    #[serde(default)]
    pub total: Option<EsTotal>,
    #[serde(default = "Vec::new")]
    pub hits: Vec<EsHit<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EsTotal {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct EsHit<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: T,
}

impl<T> From<EsSearchResponse<T>> for ResultSet<T> {
    fn from(response: EsSearchResponse<T>) -> Self {
        let hits = response
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit::new(hit.id, hit.score, hit.source))
            .collect();
        let result = ResultSet::new(hits);
        match response.hits.total {
            Some(total) => result.with_total(total.value),
            None => result,
        }
    }
}

#[async_trait]
impl SearchProvider for ElasticsearchBackend {
    async fn search<T>(&self, index: &str, query: &QueryDescriptor) -> StorageResult<ResultSet<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let body = EsQueryBuilder::new(query).build();
        tracing::debug!(index, operator = query.clause.operator(), body = %body, "Executing Elasticsearch search");

        let response = self
            .client()
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response, "search").await?;

        let parsed: EsSearchResponse<T> = response
            .json()
            .await
            .map_err(|e| decode_error("search", e))?;

        let result = ResultSet::from(parsed);
        tracing::debug!(index, hits = result.len(), total = ?result.total, "Search completed");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_parse_search_response_preserves_order() {
        let body = json!({
            "took": 3,
            "hits": {
                "total": { "value": 42, "relation": "eq" },
                "max_score": null,
                "hits": [
                    { "_index": "orders", "_id": "z", "_score": null, "_source": { "n": 3 }, "sort": [90.0] },
                    { "_index": "orders", "_id": "a", "_score": null, "_source": { "n": 1 }, "sort": [10.0] }
                ]
            }
        });

        let parsed: EsSearchResponse<Value> = serde_json::from_value(body).unwrap();
        let result = ResultSet::from(parsed);

        assert_eq!(result.total, Some(42));
        assert_eq!(result.hits[0].id, "z");
        assert_eq!(result.hits[0].score, None);
        assert_eq!(result.hits[1].source["n"], 1);
    }

    #[test]
    fn test_parse_empty_response() {
        let body = json!({ "hits": { "total": { "value": 0, "relation": "eq" }, "hits": [] } });
        let parsed: EsSearchResponse<Value> = serde_json::from_value(body).unwrap();
        let result = ResultSet::from(parsed);
        assert!(result.is_empty());
        assert_eq!(result.total, Some(0));
    }
}
