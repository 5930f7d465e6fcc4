//! Engine-neutral query descriptors.
//!
//! A [`QueryDescriptor`] is the in-memory form of one search request: a single
//! [`QueryClause`], an optional [`ResultWindow`] and zero or more
//! [`SortDirective`]s. Backends translate it into their native query language.

use serde::{Deserialize, Serialize};

/// One query operator applied to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryClause {
    /// Matches every document in the index.
    MatchAll,

    /// Exact equality against an unanalyzed field.
    Term {
        /// Target field.
        field: String,
        /// Value to compare with.
        value: String,
        /// Compare ignoring ASCII case.
        #[serde(default)]
        case_insensitive: bool,
    },

    /// Equality against any of several values (logical OR).
    Terms {
        /// Target field.
        field: String,
        /// Candidate values.
        values: Vec<String>,
    },

    /// Field starts with the given prefix.
    Prefix {
        /// Target field.
        field: String,
        /// Required prefix.
        value: String,
    },

    /// Numeric field within `[gte, lte]`, both ends inclusive.
    Range {
        /// Target field.
        field: String,
        /// Lower bound (inclusive).
        gte: f64,
        /// Upper bound (inclusive).
        lte: f64,
    },

    /// Field matches a pattern where `*` is any run and `?` any single character.
    Wildcard {
        /// Target field.
        field: String,
        /// Wildcard pattern.
        pattern: String,
    },

    /// Field within `fuzziness` edits of the value.
    Fuzzy {
        /// Target field.
        field: String,
        /// Approximate value.
        value: String,
        /// Maximum edit distance.
        fuzziness: u8,
    },
}

impl QueryClause {
    /// Returns the targeted field, or `None` for match-all.
    pub fn field(&self) -> Option<&str> {
        match self {
            QueryClause::MatchAll => None,
            QueryClause::Term { field, .. }
            | QueryClause::Terms { field, .. }
            | QueryClause::Prefix { field, .. }
            | QueryClause::Range { field, .. }
            | QueryClause::Wildcard { field, .. }
            | QueryClause::Fuzzy { field, .. } => Some(field),
        }
    }

    /// Returns the operator name used in logs.
    pub fn operator(&self) -> &'static str {
        match self {
            QueryClause::MatchAll => "match_all",
            QueryClause::Term { .. } => "term",
            QueryClause::Terms { .. } => "terms",
            QueryClause::Prefix { .. } => "prefix",
            QueryClause::Range { .. } => "range",
            QueryClause::Wildcard { .. } => "wildcard",
            QueryClause::Fuzzy { .. } => "fuzzy",
        }
    }
}

/// The `(offset, size)` pair bounding how many ranked results are returned.
///
/// `None` leaves the choice to the engine (Elasticsearch: offset 0, size 10).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultWindow {
    /// Zero-based offset of the first returned hit.
    pub from: Option<u32>,
    /// Maximum number of hits returned.
    pub size: Option<u32>,
}

impl ResultWindow {
    /// A window capped at `size` hits from the start.
    pub fn sized(size: u32) -> Self {
        Self {
            from: None,
            size: Some(size),
        }
    }

    /// A window of `size` hits starting at `from`.
    pub fn page(from: u32, size: u32) -> Self {
        Self {
            from: Some(from),
            size: Some(size),
        }
    }

    /// Returns true if neither bound is set.
    pub fn is_engine_default(&self) -> bool {
        self.from.is_none() && self.size.is_none()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the Query DSL spelling (`asc` / `desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Sort on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// Field to sort by.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// A complete, engine-neutral search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// The query operator.
    pub clause: QueryClause,
    /// Result window; engine default when unset.
    #[serde(default)]
    pub window: ResultWindow,
    /// Explicit ordering; relevance order when empty.
    #[serde(default)]
    pub sort: Vec<SortDirective>,
}

impl QueryDescriptor {
    /// Creates a descriptor with the engine's default window and relevance order.
    pub fn new(clause: QueryClause) -> Self {
        Self {
            clause,
            window: ResultWindow::default(),
            sort: Vec::new(),
        }
    }

    /// Shorthand for a match-all descriptor.
    pub fn match_all() -> Self {
        Self::new(QueryClause::MatchAll)
    }

    /// Replaces the result window.
    pub fn with_window(mut self, window: ResultWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets (or clears) the window size, keeping the offset.
    pub fn with_size(mut self, size: Option<u32>) -> Self {
        self.window.size = size;
        self
    }

    /// Appends a sort directive.
    pub fn with_sort(mut self, sort: SortDirective) -> Self {
        self.sort.push(sort);
        self
    }
}
