//! Loading content collections from disk.
//!
//! A collection file is JSON: either a bare array of items or an object with
//! an `items` array. When no `[data].path` is configured the built-in sample
//! set is returned instead.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use content_hub_core::{ContentCollection, ContentItem};

use crate::config::Config;
use crate::sample::sample_collection;

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionFile {
    Items(Vec<ContentItem>),
    Wrapped { items: Vec<ContentItem> },
}

/// Parse a collection from JSON text. Invariants are not checked here.
pub fn parse_collection(json: &str) -> Result<ContentCollection> {
    let file: CollectionFile = serde_json::from_str(json)
        .with_context(|| "Collection must be a JSON array of items or an object with an `items` array")?;
    let items = match file {
        CollectionFile::Items(items) => items,
        CollectionFile::Wrapped { items } => items,
    };
    Ok(ContentCollection::new(items))
}

pub fn read_collection(path: &Path) -> Result<ContentCollection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read collection file: {}", path.display()))?;
    let collection = parse_collection(&content)
        .with_context(|| format!("Failed to parse collection file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = collection.len(), "loaded collection");
    Ok(collection)
}

/// Load the configured collection, or the built-in samples.
pub fn load_collection(config: &Config) -> Result<ContentCollection> {
    match config.data.path.as_deref() {
        Some(path) => read_collection(path),
        None => {
            tracing::debug!("no [data].path configured, using built-in sample collection");
            Ok(sample_collection())
        }
    }
}

/// CLI entry point for `hub validate`.
pub fn run_validate(config: &Config) -> Result<()> {
    let collection = load_collection(config)?;
    collection.validate()?;

    let source = config
        .data
        .path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in samples)".to_string());
    println!("{}: {} items, ok", source, collection.len());
    Ok(())
}
