//! Export the collection as normalized JSON.
//!
//! Produces a JSON array of every item, validated and ordered newest first,
//! suitable for shipping as a static data file alongside the front-end.

use anyhow::{Context, Result};
use std::path::Path;

use content_hub_core::{execute, Query};

use crate::collection::load_collection;
use crate::config::Config;

/// Export the collection as pretty JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let collection = load_collection(config)?;
    let view = execute(collection.items(), &Query::default())?;
    let items: Vec<_> = view.items().collect();
    let json = serde_json::to_string_pretty(&items)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;
            tracing::info!(path = %path.display(), items = items.len(), "export written");
            eprintln!("Exported {} items to {}", items.len(), path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
