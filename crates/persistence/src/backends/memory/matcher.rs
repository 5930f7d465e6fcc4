//! Clause evaluation against JSON documents.
//!
//! Mirrors the Elasticsearch semantics the query layer relies on, over
//! `_source` documents held in memory:
//!
//! - Field paths are dotted; a trailing `.keyword` sub-field resolves to the
//!   parent field's raw value.
//! - A field holding an array matches if any element matches.
//! - `term`, `terms`, `prefix`, `wildcard` and `fuzzy` compare raw values
//!   case-sensitively unless the clause says otherwise.
//! - `range` bounds are inclusive on both ends.

use std::cmp::Ordering;

use regex::Regex;
use serde_json::Value;

use crate::error::{BackendError, StorageResult};
use crate::types::{QueryClause, SortDirection, SortDirective};

use super::backend::BACKEND_NAME;

const KEYWORD_SUFFIX: &str = ".keyword";

/// A clause prepared for repeated evaluation.
pub(crate) enum Matcher<'a> {
    All,
    Text {
        field: &'a str,
        test: TextTest<'a>,
    },
    Range {
        field: &'a str,
        gte: f64,
        lte: f64,
    },
}

pub(crate) enum TextTest<'a> {
    Equals { value: &'a str, case_insensitive: bool },
    AnyOf(&'a [String]),
    Prefix(&'a str),
    Pattern(Regex),
    Fuzzy { value: &'a str, fuzziness: usize },
}

impl<'a> Matcher<'a> {
    /// Prepares `clause`, compiling wildcard patterns once.
    pub(crate) fn compile(clause: &'a QueryClause) -> StorageResult<Self> {
        let matcher = match clause {
            QueryClause::MatchAll => Matcher::All,
            QueryClause::Term {
                field,
                value,
                case_insensitive,
            } => Matcher::Text {
                field,
                test: TextTest::Equals {
                    value,
                    case_insensitive: *case_insensitive,
                },
            },
            QueryClause::Terms { field, values } => Matcher::Text {
                field,
                test: TextTest::AnyOf(values),
            },
            QueryClause::Prefix { field, value } => Matcher::Text {
                field,
                test: TextTest::Prefix(value),
            },
            QueryClause::Range { field, gte, lte } => Matcher::Range {
                field,
                gte: *gte,
                lte: *lte,
            },
            QueryClause::Wildcard { field, pattern } => Matcher::Text {
                field,
                test: TextTest::Pattern(wildcard_regex(pattern)?),
            },
            QueryClause::Fuzzy {
                field,
                value,
                fuzziness,
            } => Matcher::Text {
                field,
                test: TextTest::Fuzzy {
                    value,
                    fuzziness: usize::from(*fuzziness),
                },
            },
        };
        Ok(matcher)
    }

    /// Returns true if `document` satisfies the clause.
    pub(crate) fn matches(&self, document: &Value) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Text { field, test } => resolve(document, field)
                .into_iter()
                .filter_map(as_text)
                .any(|text| test.matches(&text)),
            Matcher::Range { field, gte, lte } => resolve(document, field)
                .into_iter()
                .filter_map(as_number)
                .any(|n| n >= *gte && n <= *lte),
        }
    }
}

impl TextTest<'_> {
    fn matches(&self, text: &str) -> bool {
        match self {
            TextTest::Equals {
                value,
                case_insensitive: true,
            } => text.to_lowercase() == value.to_lowercase(),
            TextTest::Equals { value, .. } => text == *value,
            TextTest::AnyOf(values) => values.iter().any(|v| v == text),
            TextTest::Prefix(prefix) => text.starts_with(prefix),
            TextTest::Pattern(regex) => regex.is_match(text),
            TextTest::Fuzzy { value, fuzziness } => edit_distance(text, value) <= *fuzziness,
        }
    }
}

/// Translates a wildcard pattern (`*`, `?`) into an anchored regex.
fn wildcard_regex(pattern: &str) -> StorageResult<Regex> {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');

    Regex::new(&source).map_err(|e| {
        BackendError::QueryRejected {
            backend_name: BACKEND_NAME.to_string(),
            status: 400,
            message: format!("invalid wildcard pattern '{}': {}", pattern, e),
        }
        .into()
    })
}

/// Collects every value reachable at `path`, flattening arrays along the way.
pub(crate) fn resolve<'v>(document: &'v Value, path: &str) -> Vec<&'v Value> {
    let path = path.strip_suffix(KEYWORD_SUFFIX).unwrap_or(path);
    let mut current = vec![document];

    for segment in path.split('.') {
        let mut next = Vec::new();
        for value in current {
            match value {
                Value::Object(map) => {
                    if let Some(child) = map.get(segment) {
                        next.push(child);
                    }
                }
                Value::Array(items) => {
                    for item in items {
                        if let Some(child) = item.get(segment) {
                            next.push(child);
                        }
                    }
                }
                _ => {}
            }
        }
        current = next;
    }

    current
        .into_iter()
        .flat_map(|value| match value {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        })
        .collect()
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Optimal string alignment distance (Damerau-Levenshtein with adjacent
/// transpositions counted once).
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + 1);
            }
            d[i][j] = best;
        }
    }
    d[n][m]
}

/// Orders two documents by the given directives. Documents missing a sort
/// value come last regardless of direction.
pub(crate) fn compare(a: &Value, b: &Value, sort: &[SortDirective]) -> Ordering {
    for directive in sort {
        let left = sort_key(a, &directive.field);
        let right = sort_key(b, &directive.field);

        let ordering = match (left, right) {
            (Some(l), Some(r)) => {
                let natural = l.partial_cmp(&r).unwrap_or(Ordering::Equal);
                match directive.direction {
                    SortDirection::Ascending => natural,
                    SortDirection::Descending => natural.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[derive(PartialEq, PartialOrd)]
enum SortKey {
    Number(f64),
    Text(String),
}

fn sort_key(document: &Value, field: &str) -> Option<SortKey> {
    let value = resolve(document, field).into_iter().next()?;
    match value {
        Value::Number(n) => n.as_f64().map(SortKey::Number),
        Value::String(s) => Some(SortKey::Text(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> Value {
        json!({
            "customer_first_name": "Eddie",
            "customer_full_name": "Eddie Underwood",
            "taxful_total_price": 36.98,
            "category": ["Men's Clothing", "Men's Shoes"],
            "products": [{ "product_id": 6283 }, { "product_id": 19400 }]
        })
    }

    fn term(field: &str, value: &str, case_insensitive: bool) -> QueryClause {
        QueryClause::Term {
            field: field.to_string(),
            value: value.to_string(),
            case_insensitive,
        }
    }

    fn check(clause: &QueryClause) -> bool {
        Matcher::compile(clause).unwrap().matches(&order())
    }

    #[test]
    fn test_keyword_suffix_resolves_to_raw_field() {
        assert!(check(&term("customer_first_name.keyword", "Eddie", false)));
        assert!(!check(&term("customer_first_name.keyword", "eddie", false)));
        assert!(check(&term("customer_first_name.keyword", "eddie", true)));
    }

    #[test]
    fn test_array_field_matches_any_element() {
        assert!(check(&term("category.keyword", "Men's Shoes", false)));
        assert!(check(&term("products.product_id", "19400", false)));
    }

    #[test]
    fn test_terms_and_prefix() {
        assert!(check(&QueryClause::Terms {
            field: "customer_first_name.keyword".to_string(),
            values: vec!["Mary".to_string(), "Eddie".to_string()],
        }));
        assert!(check(&QueryClause::Prefix {
            field: "customer_full_name.keyword".to_string(),
            value: "Eddie U".to_string(),
        }));
        assert!(!check(&QueryClause::Prefix {
            field: "customer_full_name.keyword".to_string(),
            value: "eddie".to_string(),
        }));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = |gte, lte| QueryClause::Range {
            field: "taxful_total_price".to_string(),
            gte,
            lte,
        };
        assert!(check(&range(36.98, 36.98)));
        assert!(check(&range(10.0, 50.0)));
        assert!(!check(&range(37.0, 50.0)));
    }

    #[test]
    fn test_wildcard_escapes_literals() {
        let wildcard = |pattern: &str| QueryClause::Wildcard {
            field: "customer_full_name.keyword".to_string(),
            pattern: pattern.to_string(),
        };
        assert!(check(&wildcard("Ed*wood")));
        assert!(check(&wildcard("Eddi? Underwood")));
        assert!(!check(&wildcard("Ed.*")));
        assert!(!check(&wildcard("Underwood*")));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("Eddie", "Eddie"), 0);
        assert_eq!(edit_distance("Edie", "Eddie"), 1);
        assert_eq!(edit_distance("Edide", "Eddie"), 1);
        assert_eq!(edit_distance("Ed", "Eddie"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_missing_sort_values_last() {
        let cheap = json!({ "taxful_total_price": 10.0 });
        let dear = json!({ "taxful_total_price": 90.0 });
        let unknown = json!({});
        let sort = [SortDirective::desc("taxful_total_price")];

        assert_eq!(compare(&dear, &cheap, &sort), Ordering::Less);
        assert_eq!(compare(&unknown, &cheap, &sort), Ordering::Greater);
        assert_eq!(compare(&cheap, &unknown, &sort), Ordering::Less);
    }
}
