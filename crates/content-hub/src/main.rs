//! # Content Hub CLI (`hub`)
//!
//! Runs the content query pipeline over a collection file (or the built-in
//! samples) and prints the result.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hub init` | Write the sample collection to `[data].path` |
//! | `hub query` | Search, filter, sort, and optionally group by day |
//! | `hub categories` | List categories with item counts |
//! | `hub validate` | Check collection invariants |
//! | `hub export` | Write the collection as normalized JSON |
//! | `hub completions <shell>` | Print a shell completion script |
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `content_hub=warn,hub=warn`).

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use content_hub::query::QueryOptions;
use content_hub::{categories, collection, config, export, query, sample};

/// Content Hub CLI: search, filter, sort, and group portal content.
#[derive(Parser)]
#[command(
    name = "hub",
    about = "Content Hub — search, filter, sort, and group news articles and question papers",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/hub.toml`. When the file does not exist,
    /// built-in defaults and the sample collection are used.
    #[arg(long, global = true, default_value = "./config/hub.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in sample collection to `[data].path`.
    Init {
        /// Overwrite an existing collection file.
        #[arg(long)]
        force: bool,
    },

    /// Query the collection.
    ///
    /// Filters by category and search term, sorts, and either paginates the
    /// flat list or groups it into per-day buckets.
    Query {
        /// Case-insensitive substring matched against title, description, and tags.
        #[arg(long)]
        search: Option<String>,

        /// Exact (case-sensitive) category; `All` disables the filter.
        #[arg(long)]
        category: Option<String>,

        /// Sort key: `newest`, `oldest`, `popular`, or `alphabetical`.
        /// Defaults to `[query].default_sort`.
        #[arg(long)]
        sort: Option<String>,

        /// Metric used by `popular`: `views`, `likes`, or `downloads`.
        #[arg(long)]
        metric: Option<String>,

        /// Group results into per-day buckets, most recent first.
        #[arg(long)]
        group_by_date: bool,

        /// Page number (1-based) for flat results.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page. Defaults to `[query].per_page`.
        #[arg(long)]
        per_page: Option<usize>,

        /// Reference day for bucket labels (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List categories with item counts.
    Categories {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check that every item has a unique id, a category, and a valid date.
    Validate,

    /// Export the collection as normalized JSON (newest first).
    Export {
        /// Output file. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("content_hub=warn,hub=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "hub", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load_or_minimal(&cli.config)?;

    match cli.command {
        Commands::Init { force } => {
            sample::run_init(&cfg, force)?;
        }
        Commands::Query {
            search,
            category,
            sort,
            metric,
            group_by_date,
            page,
            per_page,
            today,
            json,
        } => {
            let opts = QueryOptions {
                search,
                category,
                sort,
                metric,
                group_by_date,
                page,
                per_page,
                today,
                json,
            };
            query::run_query(&cfg, &opts)?;
        }
        Commands::Categories { json } => {
            categories::run_categories(&cfg, json)?;
        }
        Commands::Validate => {
            collection::run_validate(&cfg)?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref())?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
