//! Elasticsearch Query DSL builder.
//!
//! Translates a [`QueryDescriptor`] into a `_search` request body.

use serde_json::{Map, Value, json};

use crate::types::{QueryClause, QueryDescriptor, ResultWindow, SortDirective};

/// Builds Elasticsearch request bodies from query descriptors.
pub struct EsQueryBuilder<'a> {
    descriptor: &'a QueryDescriptor,
}

impl<'a> EsQueryBuilder<'a> {
    /// Creates a new query builder.
    pub fn new(descriptor: &'a QueryDescriptor) -> Self {
        Self { descriptor }
    }

    /// Builds the complete `_search` body.
    ///
    /// `from`, `size` and `sort` are only emitted when the descriptor sets them,
    /// so the engine applies its own defaults otherwise.
    pub fn build(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), build_clause(&self.descriptor.clause));

        add_window(&mut body, &self.descriptor.window);

        if !self.descriptor.sort.is_empty() {
            body.insert("sort".to_string(), build_sort(&self.descriptor.sort));
        }

        Value::Object(body)
    }
}

/// Builds the `query` object for one clause.
pub fn build_clause(clause: &QueryClause) -> Value {
    match clause {
        QueryClause::MatchAll => json!({ "match_all": {} }),
        QueryClause::Term {
            field,
            value,
            case_insensitive,
        } => {
            let mut term = json!({ "value": value });
            if *case_insensitive {
                term["case_insensitive"] = json!(true);
            }
            json!({ "term": { field.as_str(): term } })
        }
        QueryClause::Terms { field, values } => {
            json!({ "terms": { field.as_str(): values } })
        }
        QueryClause::Prefix { field, value } => {
            json!({ "prefix": { field.as_str(): { "value": value } } })
        }
        QueryClause::Range { field, gte, lte } => {
            json!({ "range": { field.as_str(): { "gte": gte, "lte": lte } } })
        }
        QueryClause::Wildcard { field, pattern } => {
            json!({ "wildcard": { field.as_str(): { "value": pattern } } })
        }
        QueryClause::Fuzzy {
            field,
            value,
            fuzziness,
        } => {
            json!({ "fuzzy": { field.as_str(): { "value": value, "fuzziness": fuzziness } } })
        }
    }
}

fn add_window(body: &mut Map<String, Value>, window: &ResultWindow) {
    if let Some(from) = window.from {
        body.insert("from".to_string(), json!(from));
    }
    if let Some(size) = window.size {
        body.insert("size".to_string(), json!(size));
    }
}

/// Builds the sort clause.
fn build_sort(directives: &[SortDirective]) -> Value {
    Value::Array(
        directives
            .iter()
            .map(|directive| {
                json!({ directive.field.as_str(): { "order": directive.direction.as_str() } })
            })
            .collect(),
    )
}
