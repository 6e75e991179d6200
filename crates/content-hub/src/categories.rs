//! Category facet listing for `hub categories`.

use anyhow::Result;

use content_hub_core::facets::category_counts;

use crate::collection::load_collection;
use crate::config::Config;

pub fn run_categories(config: &Config, json: bool) -> Result<()> {
    let collection = load_collection(config)?;
    let facets = category_counts(collection.items());

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!("{:<24} ITEMS", "CATEGORY");
    for facet in &facets {
        println!("{:<24} {}", facet.name, facet.count);
    }
    Ok(())
}
