//! Query parameters collected from the host UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidQuery;

/// Category sentinel meaning "no category filter". Matched exactly and
/// case-sensitively; `"all"` is an ordinary category name.
pub const ALL_CATEGORIES: &str = "All";

/// Ordering applied to the filtered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `published_at` descending.
    Newest,
    /// `published_at` ascending.
    Oldest,
    /// Designated metric descending.
    Popular,
    /// Case-insensitive title, ascending.
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Popular,
        SortKey::Alphabetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SortKey {
    type Err = InvalidQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "popular" => Ok(SortKey::Popular),
            "alphabetical" => Ok(SortKey::Alphabetical),
            other => Err(InvalidQuery::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The counter that `popular` sorting ranks by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopularityMetric {
    #[default]
    Views,
    Likes,
    Downloads,
}

impl FromStr for PopularityMetric {
    type Err = InvalidQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(PopularityMetric::Views),
            "likes" => Ok(PopularityMetric::Likes),
            "downloads" => Ok(PopularityMetric::Downloads),
            other => Err(InvalidQuery::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for PopularityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PopularityMetric::Views => "views",
            PopularityMetric::Likes => "likes",
            PopularityMetric::Downloads => "downloads",
        })
    }
}

/// What the caller wants to see.
///
/// `sort_by` stays a string so that a host passing an unrecognised value
/// gets an [`InvalidQuery`] from the pipeline instead of a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Case-insensitive substring matched against title, description and
    /// tags. Empty (after trimming) matches everything.
    pub search_term: String,
    /// Exact category, or [`ALL_CATEGORIES`].
    pub category: String,
    /// One of `newest`, `oldest`, `popular`, `alphabetical`.
    pub sort_by: String,
    /// Partition the result into per-day buckets.
    pub group_by_date: bool,
    pub popular_metric: PopularityMetric,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_by: SortKey::Newest.as_str().to_string(),
            group_by_date: false,
            popular_metric: PopularityMetric::Views,
        }
    }
}

impl Query {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn with_metric(mut self, metric: PopularityMetric) -> Self {
        self.popular_metric = metric;
        self
    }

    pub fn grouped(mut self, group_by_date: bool) -> Self {
        self.group_by_date = group_by_date;
        self
    }

    pub fn sort_key(&self) -> Result<SortKey, InvalidQuery> {
        self.sort_by.parse()
    }

    /// Lowercased, trimmed search needle, or `None` when search is off.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Category to filter on, or `None` for [`ALL_CATEGORIES`].
    pub fn category_filter(&self) -> Option<&str> {
        if self.category == ALL_CATEGORIES {
            None
        } else {
            Some(self.category.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = Query::default();
        assert_eq!(q.search_term, "");
        assert_eq!(q.category, "All");
        assert_eq!(q.sort_key().unwrap(), SortKey::Newest);
        assert!(!q.group_by_date);
        assert_eq!(q.popular_metric, PopularityMetric::Views);
    }

    #[test]
    fn test_sort_key_round_trip_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_is_case_sensitive() {
        assert_eq!(
            "Newest".parse::<SortKey>(),
            Err(InvalidQuery::UnknownSortKey("Newest".to_string()))
        );
        assert!("bogus".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_unknown_metric() {
        assert_eq!(
            "shares".parse::<PopularityMetric>(),
            Err(InvalidQuery::UnknownMetric("shares".to_string()))
        );
        assert_eq!(
            "downloads".parse::<PopularityMetric>().unwrap(),
            PopularityMetric::Downloads
        );
    }

    #[test]
    fn test_needle_trims_and_lowercases() {
        assert_eq!(Query::default().with_search("   ").needle(), None);
        assert_eq!(
            Query::default().with_search("  Exam ").needle().as_deref(),
            Some("exam")
        );
    }

    #[test]
    fn test_all_sentinel_is_exact() {
        assert_eq!(Query::default().category_filter(), None);
        assert_eq!(
            Query::default().with_category("all").category_filter(),
            Some("all")
        );
    }

    #[test]
    fn test_deserialize_partial_query() {
        let q: Query = serde_json::from_str(r#"{"search_term": "jee", "group_by_date": true}"#)
            .unwrap();
        assert_eq!(q.search_term, "jee");
        assert!(q.group_by_date);
        assert_eq!(q.category, ALL_CATEGORIES);
        assert_eq!(q.sort_by, "newest");
    }
}
