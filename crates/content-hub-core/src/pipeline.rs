//! The search / filter / sort / group pipeline.
//!
//! Every content view (news hub, question-paper browser, category pages)
//! derives what it shows from one call to [`execute`]. The function is pure:
//! it borrows the collection immutably, never reads the clock, and returns
//! the same [`View`] for the same inputs.
//!
//! # Stages
//!
//! 1. Parse the sort key and validate every item in the collection.
//! 2. Filter by category (skipped for `"All"`).
//! 3. Filter by search term (skipped when blank after trimming).
//! 4. Sort by the requested key, tie-broken by `id` ascending.
//! 5. Optionally partition into per-day buckets, most recent day first.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::InvalidQuery;
use crate::models::{validate_items, ContentItem};
use crate::query::{PopularityMetric, Query, SortKey};

/// Items sharing one calendar day of `published_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBucket<'a> {
    pub date: NaiveDate,
    pub items: Vec<&'a ContentItem>,
}

/// The derived, ordered result of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum View<'a> {
    Flat(Vec<&'a ContentItem>),
    Grouped(Vec<DateBucket<'a>>),
}

impl<'a> View<'a> {
    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        match self {
            View::Flat(items) => items.len(),
            View::Grouped(buckets) => buckets.iter().map(|b| b.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items in display order, flattening buckets.
    pub fn items(&self) -> Box<dyn Iterator<Item = &'a ContentItem> + '_> {
        match self {
            View::Flat(items) => Box::new(items.iter().copied()),
            View::Grouped(buckets) => {
                Box::new(buckets.iter().flat_map(|b| b.items.iter().copied()))
            }
        }
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items().map(|item| item.id.as_str()).collect()
    }
}

/// Run a query against a collection.
///
/// Fails with [`InvalidQuery`] when `sort_by` is not a known key or when any
/// item in the collection (matching or not) breaks an invariant. An empty
/// collection or a query with no matches yields an empty view.
pub fn execute<'a>(collection: &'a [ContentItem], query: &Query) -> Result<View<'a>, InvalidQuery> {
    let sort_key = query.sort_key()?;
    let dates = validate_items(collection)?;

    let category = query.category_filter();
    let needle = query.needle();

    let mut matched: Vec<(&'a ContentItem, NaiveDate)> = collection
        .iter()
        .zip(dates)
        .filter(|(item, _)| category.map_or(true, |c| item.category == c))
        .filter(|(item, _)| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(item, needle))
        })
        .collect();

    matched.sort_by(|a, b| compare(a, b, sort_key, query.popular_metric));

    if query.group_by_date {
        Ok(View::Grouped(group_by_day(matched)))
    } else {
        Ok(View::Flat(matched.into_iter().map(|(item, _)| item).collect()))
    }
}

/// Whether `needle` (already lowercased) occurs in the title, description,
/// or any tag, ignoring case.
pub fn matches_search(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn compare(
    a: &(&ContentItem, NaiveDate),
    b: &(&ContentItem, NaiveDate),
    key: SortKey,
    metric: PopularityMetric,
) -> Ordering {
    let (item_a, date_a) = a;
    let (item_b, date_b) = b;

    let primary = match key {
        SortKey::Newest => date_b.cmp(date_a),
        SortKey::Oldest => date_a.cmp(date_b),
        SortKey::Popular => item_b.metric(metric).cmp(&item_a.metric(metric)),
        SortKey::Alphabetical => compare_titles(&item_a.title, &item_b.title),
    };

    primary.then_with(|| item_a.id.cmp(&item_b.id))
}

/// Case-insensitive ordinal comparison: lowercase each code point, then
/// compare code point by code point. Locale-independent.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn group_by_day<'a>(sorted: Vec<(&'a ContentItem, NaiveDate)>) -> Vec<DateBucket<'a>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&'a ContentItem>> = BTreeMap::new();
    for (item, date) in sorted {
        by_day.entry(date).or_default().push(item);
    }

    by_day
        .into_iter()
        .rev()
        .map(|(date, items)| DateBucket { date, items })
        .collect()
}
