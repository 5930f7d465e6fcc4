//! Search results as returned by a backend.

/// A document that carries its own engine identifier.
///
/// Search engines store identifiers separately from field values, so the
/// identifier is copied onto the document after every read.
pub trait Identified {
    /// Returns the document identifier (empty when not yet assigned).
    fn id(&self) -> &str;

    /// Replaces the document identifier.
    fn set_id(&mut self, id: String);
}

/// One matched document plus the engine's metadata for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<T> {
    /// Engine-assigned document identifier.
    pub id: String,
    /// Relevance score; `None` when the engine sorted explicitly.
    pub score: Option<f64>,
    /// The typed document source.
    pub source: T,
}

impl<T> SearchHit<T> {
    /// Creates a hit.
    pub fn new(id: impl Into<String>, score: Option<f64>, source: T) -> Self {
        Self {
            id: id.into(),
            score,
            source,
        }
    }
}

impl<T: Identified> SearchHit<T> {
    /// Consumes the hit, returning its document with the engine id copied in.
    pub fn into_identified(self) -> T {
        let mut document = self.source;
        document.set_id(self.id);
        document
    }
}

/// The ordered hits of one search request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    /// Hits in engine order (relevance, or the requested sort).
    pub hits: Vec<SearchHit<T>>,
    /// Total number of matching documents, when reported.
    pub total: Option<u64>,
}

impl<T> ResultSet<T> {
    /// Creates a result set from hits in engine order.
    pub fn new(hits: Vec<SearchHit<T>>) -> Self {
        Self { hits, total: None }
    }

    /// An empty result set.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Records the engine-reported total.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Number of hits in this window.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if no documents matched within the window.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Returns the documents without touching their identifiers.
    pub fn into_documents(self) -> Vec<T> {
        self.hits.into_iter().map(|hit| hit.source).collect()
    }
}

impl<T: Identified> ResultSet<T> {
    /// Returns every document, in order, with its hit id injected.
    pub fn into_identified(self) -> Vec<T> {
        self.hits
            .into_iter()
            .map(SearchHit::into_identified)
            .collect()
    }
}
