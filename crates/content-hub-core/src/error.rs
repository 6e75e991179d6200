//! Error type for the query pipeline.
//!
//! Every failure the core can report is a programming or data defect, so
//! there is a single category. Empty collections, empty search terms, and
//! queries with no matches all succeed with an empty view.

/// A query or collection that the pipeline refuses to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    #[error("invalid query: unknown sort key '{0}' (expected newest, oldest, popular, or alphabetical)")]
    UnknownSortKey(String),

    #[error("invalid query: unknown popularity metric '{0}' (expected views, likes, or downloads)")]
    UnknownMetric(String),

    #[error("invalid query: item '{id}' has malformed published_at '{value}'")]
    MalformedDate { id: String, value: String },

    #[error("invalid query: item '{id}' has an empty category")]
    EmptyCategory { id: String },

    #[error("invalid query: duplicate item id '{0}'")]
    DuplicateId(String),
}
