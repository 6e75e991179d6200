//! Category facets backing the category filter buttons.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ContentItem;
use crate::query::ALL_CATEGORIES;

/// A category label and how many items carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Count items per category.
///
/// The first entry is always [`ALL_CATEGORIES`] with the collection total,
/// followed by each distinct category in ordinal ascending order.
pub fn category_counts(items: &[ContentItem]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.category.as_str()).or_insert(0) += 1;
    }

    let mut facets = Vec::with_capacity(counts.len() + 1);
    facets.push(CategoryCount {
        name: ALL_CATEGORIES.to_string(),
        count: items.len(),
    });
    facets.extend(counts.into_iter().map(|(name, count)| CategoryCount {
        name: name.to_string(),
        count,
    }));
    facets
}
