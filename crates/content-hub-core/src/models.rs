//! Content data models.
//!
//! A [`ContentItem`] is one news article or one previous-year question
//! paper. Both share the same shape; [`ContentKind`] records which one it is
//! but never influences query semantics.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidQuery;
use crate::query::PopularityMetric;

/// What sort of record a [`ContentItem`] represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    News,
    QuestionPaper,
}

/// Engagement counters. Absent counters deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub downloads: u64,
}

/// A single news article or question paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique within a collection.
    pub id: String,
    pub title: String,
    #[serde(alias = "body", default)]
    pub description: String,
    /// Exactly one label from an open set, e.g. `"Exam Results"`.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default)]
    pub kind: ContentKind,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            tags: Vec::new(),
            published_at: published_at.into(),
            metrics: None,
            kind: ContentKind::News,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Parse `published_at` into a calendar day.
    ///
    /// RFC 3339 timestamps resolve to the day in their own offset, so
    /// `2025-01-01T23:30:00-05:00` is January 1st.
    pub fn published_date(&self) -> Result<NaiveDate, InvalidQuery> {
        let raw = self.published_at.as_str();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .map_err(|_| InvalidQuery::MalformedDate {
                id: self.id.clone(),
                value: self.published_at.clone(),
            })
    }

    /// Value of the given counter, zero when the item carries no metrics.
    pub fn metric(&self, metric: PopularityMetric) -> u64 {
        let Some(m) = &self.metrics else {
            return 0;
        };
        match metric {
            PopularityMetric::Views => m.views,
            PopularityMetric::Likes => m.likes,
            PopularityMetric::Downloads => m.downloads,
        }
    }
}

/// Check collection invariants and return each item's parsed date,
/// index-aligned with `items`.
///
/// Fails on the first item (in input order) with a malformed date, an
/// empty category, or an id already seen.
pub fn validate_items(items: &[ContentItem]) -> Result<Vec<NaiveDate>, InvalidQuery> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    let mut dates = Vec::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(InvalidQuery::DuplicateId(item.id.clone()));
        }
        if item.category.is_empty() {
            return Err(InvalidQuery::EmptyCategory {
                id: item.id.clone(),
            });
        }
        dates.push(item.published_date()?);
    }

    Ok(dates)
}

/// An ordered, injected set of content items.
///
/// The collection never mutates its items; whoever loads the data owns
/// its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentCollection {
    items: Vec<ContentItem>,
}

impl ContentCollection {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn validate(&self) -> Result<(), InvalidQuery> {
        validate_items(&self.items).map(|_| ())
    }
}

impl From<Vec<ContentItem>> for ContentCollection {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}
