//! High-level e-commerce search intents and their translation into query
//! descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};
use crate::types::{QueryClause, QueryDescriptor, ResultWindow, SortDirective};

use super::config::{ECommerceFields, WindowConfig};

/// Maximum edit distance accepted by fuzzy name searches.
pub const FUZZY_EDIT_DISTANCE: u8 = 2;

/// One of the supported e-commerce searches, with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum SearchIntent {
    /// Orders whose customer first name equals `value`, ignoring case.
    Term {
        /// First name.
        value: String,
    },
    /// Orders whose customer first name equals any of `values`.
    Terms {
        /// Candidate first names.
        values: Vec<String>,
    },
    /// Orders whose customer full name starts with `prefix`.
    Prefix {
        /// Full-name prefix.
        prefix: String,
    },
    /// Orders whose total lies in `[from, to]`.
    Range {
        /// Lowest total (inclusive).
        from: f64,
        /// Highest total (inclusive).
        to: f64,
    },
    /// Every order.
    MatchAll,
    /// One page of every order, 1-based.
    Page {
        /// Page number, starting at 1.
        page: i64,
        /// Orders per page.
        page_size: i64,
    },
    /// Orders whose customer full name matches a `*` / `?` pattern.
    Wildcard {
        /// Wildcard pattern.
        pattern: String,
    },
    /// Orders whose customer first name is within two edits of `value`,
    /// most expensive first.
    Fuzzy {
        /// Approximate first name.
        value: String,
    },
}

impl SearchIntent {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SearchIntent::Term { .. } => "term",
            SearchIntent::Terms { .. } => "terms",
            SearchIntent::Prefix { .. } => "prefix",
            SearchIntent::Range { .. } => "range",
            SearchIntent::MatchAll => "match_all",
            SearchIntent::Page { .. } => "pagination",
            SearchIntent::Wildcard { .. } => "wildcard",
            SearchIntent::Fuzzy { .. } => "fuzzy",
        }
    }

    /// Checks the intent's preconditions without building anything.
    pub fn validate(&self) -> StorageResult<()> {
        let op = self.name();
        match self {
            SearchIntent::Term { value } | SearchIntent::Fuzzy { value } => {
                require_text(op, "value", value)
            }
            SearchIntent::Prefix { prefix } => require_text(op, "prefix", prefix),
            SearchIntent::Wildcard { pattern } => require_text(op, "pattern", pattern),
            SearchIntent::Terms { values } => {
                if values.is_empty() {
                    return Err(StorageError::precondition(
                        op,
                        "at least one value is required",
                    ));
                }
                values
                    .iter()
                    .try_for_each(|value| require_text(op, "value", value))
            }
            SearchIntent::Range { from, to } => {
                if !from.is_finite() || !to.is_finite() {
                    return Err(StorageError::precondition(
                        op,
                        format!("bounds must be finite numbers, got [{}, {}]", from, to),
                    ));
                }
                if from > to {
                    return Err(StorageError::precondition(
                        op,
                        format!("lower bound {} is greater than upper bound {}", from, to),
                    ));
                }
                Ok(())
            }
            SearchIntent::MatchAll => Ok(()),
            SearchIntent::Page { page, page_size } => page_window(*page, *page_size).map(|_| ()),
        }
    }

    /// Translates the intent into a query descriptor.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if [`validate`](Self::validate) fails.
    pub fn to_descriptor(
        &self,
        fields: &ECommerceFields,
        windows: &WindowConfig,
    ) -> StorageResult<QueryDescriptor> {
        self.validate()?;

        let descriptor = match self {
            SearchIntent::Term { value } => QueryDescriptor::new(QueryClause::Term {
                field: fields.first_name.clone(),
                value: value.clone(),
                case_insensitive: true,
            })
            .with_size(windows.term),

            SearchIntent::Terms { values } => QueryDescriptor::new(QueryClause::Terms {
                field: fields.first_name.clone(),
                values: values.clone(),
            })
            .with_size(windows.terms),

            SearchIntent::Prefix { prefix } => QueryDescriptor::new(QueryClause::Prefix {
                field: fields.full_name.clone(),
                value: prefix.clone(),
            })
            .with_size(windows.prefix),

            SearchIntent::Range { from, to } => QueryDescriptor::new(QueryClause::Range {
                field: fields.total_price.clone(),
                gte: *from,
                lte: *to,
            })
            .with_size(windows.range),

            SearchIntent::MatchAll => QueryDescriptor::match_all().with_size(windows.match_all),

            SearchIntent::Page { page, page_size } => {
                QueryDescriptor::match_all().with_window(page_window(*page, *page_size)?)
            }

            SearchIntent::Wildcard { pattern } => QueryDescriptor::new(QueryClause::Wildcard {
                field: fields.full_name.clone(),
                pattern: pattern.clone(),
            })
            .with_size(windows.wildcard),

            SearchIntent::Fuzzy { value } => QueryDescriptor::new(QueryClause::Fuzzy {
                field: fields.first_name.clone(),
                value: value.clone(),
                fuzziness: FUZZY_EDIT_DISTANCE,
            })
            .with_sort(SortDirective::desc(fields.total_price.clone()))
            .with_size(windows.fuzzy),
        };

        Ok(descriptor)
    }
}

fn require_text(op: &str, what: &str, value: &str) -> StorageResult<()> {
    if value.trim().is_empty() {
        return Err(StorageError::precondition(
            op,
            format!("{} must not be empty", what),
        ));
    }
    Ok(())
}

/// Window for a 1-based page: offset `(page - 1) * page_size`.
fn page_window(page: i64, page_size: i64) -> StorageResult<ResultWindow> {
    const OP: &str = "pagination";

    if page < 1 {
        return Err(StorageError::precondition(
            OP,
            format!("page must be at least 1, got {}", page),
        ));
    }
    if page_size < 1 {
        return Err(StorageError::precondition(
            OP,
            format!("page_size must be at least 1, got {}", page_size),
        ));
    }

    let size = u32::try_from(page_size).map_err(|_| {
        StorageError::precondition(OP, format!("page_size {} is too large", page_size))
    })?;
    let from = (page - 1)
        .checked_mul(page_size)
        .and_then(|offset| u32::try_from(offset).ok())
        .ok_or_else(|| {
            StorageError::precondition(
                OP,
                format!("offset for page {} of size {} is out of range", page, page_size),
            )
        })?;

    Ok(ResultWindow::page(from, size))
}
