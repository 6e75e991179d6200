//! TOML configuration parsing and validation.
//!
//! Every section is optional. A missing file falls back to
//! [`Config::minimal`], which serves the built-in sample collection with
//! default query settings.
//!
//! ```toml
//! [data]
//! path = "data/content.json"
//!
//! [query]
//! default_sort = "newest"
//! popular_metric = "views"
//! per_page = 10
//!
//! [display]
//! older_after_days = 7
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use content_hub_core::{PopularityMetric, SortKey};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON collection file. When unset, the built-in sample set is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default)]
    pub popular_metric: PopularityMetric,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            popular_metric: PopularityMetric::Views,
            per_page: default_per_page(),
        }
    }
}

fn default_sort() -> String {
    SortKey::Newest.as_str().to_string()
}
fn default_per_page() -> usize {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_older_after_days")]
    pub older_after_days: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            older_after_days: default_older_after_days(),
        }
    }
}

fn default_older_after_days() -> i64 {
    7
}

impl Config {
    /// Defaults with no data file: queries run over the built-in samples.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

fn validate(config: &Config) -> Result<()> {
    if config.query.default_sort.parse::<SortKey>().is_err() {
        bail!(
            "query.default_sort must be newest, oldest, popular, or alphabetical (got '{}')",
            config.query.default_sort
        );
    }

    if config.query.per_page == 0 {
        bail!("query.per_page must be >= 1");
    }

    if config.display.older_after_days < 2 {
        bail!("display.older_after_days must be >= 2");
    }

    Ok(())
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::info!(
            config = %path.display(),
            "config file not found, using built-in defaults"
        );
        Ok(Config::minimal())
    }
}
