//! In-memory backend.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{Backend, BackendKind, DocumentStorage, SearchProvider};
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{QueryDescriptor, ResultSet, SearchHit};

use super::matcher::{Matcher, compare};

pub(crate) const BACKEND_NAME: &str = "memory";

/// Window size applied when a descriptor leaves it to the engine.
pub const DEFAULT_WINDOW_SIZE: u32 = 10;

/// Documents of one index in insertion order.
type IndexDocuments = Vec<(String, Value)>;

/// A process-local search engine.
///
/// Documents are kept as raw JSON per index, in insertion order, and every
/// search is a full scan. Relevance is flat (every hit scores `1.0`), so
/// unsorted results come back in insertion order.
#[derive(Default)]
pub struct MemoryBackend {
    indices: RwLock<HashMap<String, IndexDocuments>>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indices = self.indices.read();
        f.debug_struct("MemoryBackend")
            .field("indices", &indices.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a raw document.
    pub fn insert(&self, index: &str, id: impl Into<String>, source: Value) {
        let id = id.into();
        let mut indices = self.indices.write();
        let documents = indices.entry(index.to_string()).or_default();
        match documents.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = source,
            None => documents.push((id, source)),
        }
    }

    /// Number of documents in `index`.
    pub fn document_count(&self, index: &str) -> usize {
        self.indices.read().get(index).map_or(0, Vec::len)
    }
}

fn decode<T: DeserializeOwned>(id: &str, source: Value) -> StorageResult<T> {
    serde_json::from_value(source).map_err(|e| {
        BackendError::Deserialization {
            message: format!("document '{}': {}", id, e),
        }
        .into()
    })
}

#[async_trait]
impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[async_trait]
impl SearchProvider for MemoryBackend {
    async fn search<T>(&self, index: &str, query: &QueryDescriptor) -> StorageResult<ResultSet<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let matcher = Matcher::compile(&query.clause)?;

        let mut matched: Vec<(String, Value)> = {
            let indices = self.indices.read();
            indices
                .get(index)
                .map(|documents| {
                    documents
                        .iter()
                        .filter(|(_, source)| matcher.matches(source))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };

        let sorted = !query.sort.is_empty();
        if sorted {
            // stable, so ties keep insertion order
            matched.sort_by(|(_, a), (_, b)| compare(a, b, &query.sort));
        }

        let total = matched.len() as u64;
        let from = query.window.from.unwrap_or(0) as usize;
        let size = query.window.size.unwrap_or(DEFAULT_WINDOW_SIZE) as usize;
        let score = if sorted { None } else { Some(1.0) };

        let hits = matched
            .into_iter()
            .skip(from)
            .take(size)
            .map(|(id, source)| {
                let document = decode(&id, source)?;
                Ok(SearchHit::new(id, score, document))
            })
            .collect::<StorageResult<Vec<_>>>()?;

        tracing::debug!(
            index,
            operator = query.clause.operator(),
            hits = hits.len(),
            total,
            "Memory search completed"
        );
        Ok(ResultSet::new(hits).with_total(total))
    }
}

#[async_trait]
impl DocumentStorage for MemoryBackend {
    async fn index_document<T>(&self, index: &str, id: &str, document: &T) -> StorageResult<()>
    where
        T: Serialize + Sync,
    {
        let source = serde_json::to_value(document).map_err(|e| BackendError::Deserialization {
            message: format!("document '{}': {}", id, e),
        })?;
        self.insert(index, id, source);
        Ok(())
    }

    async fn get_document<T>(&self, index: &str, id: &str) -> StorageResult<Option<SearchHit<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let source = {
            let indices = self.indices.read();
            indices
                .get(index)
                .and_then(|documents| documents.iter().find(|(existing, _)| existing == id))
                .map(|(_, source)| source.clone())
        };

        match source {
            Some(source) => Ok(Some(SearchHit::new(id, None, decode(id, source)?))),
            None => Ok(None),
        }
    }

    async fn delete_document(&self, index: &str, id: &str) -> StorageResult<()> {
        let mut indices = self.indices.write();
        let documents = indices.get_mut(index);
        let position = documents
            .as_ref()
            .and_then(|documents| documents.iter().position(|(existing, _)| existing == id));

        match (documents, position) {
            (Some(documents), Some(position)) => {
                documents.remove(position);
                Ok(())
            }
            _ => Err(StorageError::Resource(ResourceError::NotFound {
                index: index.to_string(),
                id: id.to_string(),
            })),
        }
    }
}
