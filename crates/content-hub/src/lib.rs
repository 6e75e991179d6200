//! # Content Hub
//!
//! **Search, filter, sort, and group news articles and question papers.**
//!
//! Content Hub backs the news hub and previous-year-question browser of an
//! education portal. The query logic lives in the pure
//! `content-hub-core` crate; this crate is the host around it: it loads a
//! collection, reads configuration, and exposes the pipeline through the
//! `hub` CLI.
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ JSON file or │──▶│ QueryPipeline│──▶│ paginate /   │──▶ text or JSON
//! │ sample set   │   │ (core crate) │   │ day labels   │
//! └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! hub init                                  # write sample data to [data].path
//! hub query --search exam --sort popular    # filtered, ranked list
//! hub query --group-by-date                 # Today / Yesterday / N days ago
//! hub categories                            # facet counts
//! hub export --output site/content.json     # normalized data file
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`collection`] | Collection file loading and `hub validate` |
//! | [`sample`] | Built-in sample collection and `hub init` |
//! | [`query`] | Query flags → pipeline → paginated or grouped output |
//! | [`categories`] | Category facet listing |
//! | [`export`] | Normalized JSON export |

pub mod categories;
pub mod collection;
pub mod config;
pub mod export;
pub mod query;
pub mod sample;

pub use content_hub_core::{ContentCollection, ContentItem, InvalidQuery, Query, View};
