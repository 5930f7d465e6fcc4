//! DocumentStorage implementation for Elasticsearch.

use async_trait::async_trait;
use elasticsearch::params::Refresh;
use elasticsearch::{DeleteParts, GetParts, IndexParts};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::DocumentStorage;
use crate::error::{ResourceError, StorageError, StorageResult};
use crate::types::SearchHit;

use super::backend::{ElasticsearchBackend, decode_error, ensure_success, transport_error};

/// The parts of a `GET /{index}/_doc/{id}` response the backend reads.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct EsGetResponse<T> {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    found: bool,
    #[serde(rename = "_source", default = "Option::default")]
    source: Option<T>,
}

#[async_trait]
impl DocumentStorage for ElasticsearchBackend {
    async fn index_document<T>(&self, index: &str, id: &str, document: &T) -> StorageResult<()>
    where
        T: Serialize + Sync,
    {
        let response = self
            .client()
            .index(IndexParts::IndexId(index, id))
            .refresh(Refresh::WaitFor)
            .body(document)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response, "index").await?;
        tracing::debug!(index, id, "Indexed document");
        Ok(())
    }

    async fn get_document<T>(&self, index: &str, id: &str) -> StorageResult<Option<SearchHit<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let response = self
            .client()
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(transport_error)?;

        // 404 covers both a missing document and a missing index
        if response.status_code().as_u16() == 404 {
            return Ok(None);
        }

        let response = ensure_success(response, "get").await?;
        let body: EsGetResponse<T> = response.json().await.map_err(|e| decode_error("get", e))?;

        if !body.found {
            return Ok(None);
        }
        Ok(body.source.map(|source| SearchHit::new(body.id, None, source)))
    }

    async fn delete_document(&self, index: &str, id: &str) -> StorageResult<()> {
        let response = self
            .client()
            .delete(DeleteParts::IndexId(index, id))
            .refresh(Refresh::WaitFor)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status_code().as_u16() == 404 {
            return Err(StorageError::Resource(ResourceError::NotFound {
                index: index.to_string(),
                id: id.to_string(),
            }));
        }

        ensure_success(response, "delete").await?;
        tracing::debug!(index, id, "Deleted document");
        Ok(())
    }
}
