//! # Content Hub Core
//!
//! Pure, synchronous logic for Content Hub: content models, the
//! search/filter/sort/group query pipeline, category facets, pagination,
//! and relative day labels.
//!
//! This crate contains no filesystem I/O, no clock access, and no logging.
//! Every function is a deterministic transform of its arguments, so the
//! same collection and query always produce the same view.

pub mod error;
pub mod facets;
pub mod models;
pub mod paginate;
pub mod pipeline;
pub mod query;
pub mod relative;

pub use error::InvalidQuery;
pub use models::{ContentCollection, ContentItem, ContentKind, Metrics};
pub use pipeline::{execute, DateBucket, View};
pub use query::{PopularityMetric, Query, SortKey, ALL_CATEGORIES};
