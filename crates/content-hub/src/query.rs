//! Application-level entry point for querying a collection.
//!
//! The pipeline itself lives in `content-hub-core::pipeline` and is pure.
//! This wrapper merges CLI flags with config defaults, loads the
//! collection, paginates flat results, labels date buckets relative to a
//! reference day, and formats output for the terminal or as JSON.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use content_hub_core::paginate::{paginate, Page};
use content_hub_core::relative::{relative_label, DayLabel};
use content_hub_core::{execute, ContentItem, PopularityMetric, Query, View, ALL_CATEGORIES};

use crate::collection::load_collection;
use crate::config::Config;

/// Query flags as collected from the command line. `None` means "use the
/// config or query default".
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub metric: Option<String>,
    pub group_by_date: bool,
    pub page: usize,
    pub per_page: Option<usize>,
    /// Reference day for bucket labels (`YYYY-MM-DD`); defaults to the local date.
    pub today: Option<String>,
    pub json: bool,
}

/// A date bucket with its relative label, as rendered.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledBucket<'a> {
    pub date: NaiveDate,
    pub label: DayLabel,
    pub items: Vec<&'a ContentItem>,
}

/// Output of a query after pagination or labelling.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QueryOutput<'a> {
    Flat { page: Page<&'a ContentItem> },
    Grouped { buckets: Vec<LabeledBucket<'a>> },
}

/// Merge CLI options over config defaults into a pipeline [`Query`].
pub fn build_query(config: &Config, opts: &QueryOptions) -> Result<Query> {
    let popular_metric = match opts.metric.as_deref() {
        Some(name) => name.parse::<PopularityMetric>()?,
        None => config.query.popular_metric,
    };

    Ok(Query {
        search_term: opts.search.clone().unwrap_or_default(),
        category: opts
            .category
            .clone()
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        sort_by: opts
            .sort
            .clone()
            .unwrap_or_else(|| config.query.default_sort.clone()),
        group_by_date: opts.group_by_date,
        popular_metric,
    })
}

fn reference_day(opts: &QueryOptions) -> Result<NaiveDate> {
    match opts.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--today must be YYYY-MM-DD (got '{}')", raw)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Shape a pipeline [`View`] for output.
///
/// Flat views are paginated; grouped views are returned whole with each
/// bucket labelled relative to `today`.
pub fn shape_view<'a>(
    view: View<'a>,
    page: usize,
    per_page: usize,
    today: NaiveDate,
    older_after_days: i64,
) -> QueryOutput<'a> {
    match view {
        View::Flat(items) => {
            let page = paginate(&items, page, per_page);
            QueryOutput::Flat {
                page: Page {
                    items: page.items.into_iter().copied().collect(),
                    page: page.page,
                    per_page: page.per_page,
                    total_items: page.total_items,
                    total_pages: page.total_pages,
                },
            }
        }
        View::Grouped(buckets) => QueryOutput::Grouped {
            buckets: buckets
                .into_iter()
                .map(|bucket| LabeledBucket {
                    date: bucket.date,
                    label: relative_label(bucket.date, today, older_after_days),
                    items: bucket.items,
                })
                .collect(),
        },
    }
}

/// CLI entry point for `hub query`.
pub fn run_query(config: &Config, opts: &QueryOptions) -> Result<()> {
    let collection = load_collection(config)?;
    let query = build_query(config, opts)?;
    let today = reference_day(opts)?;

    tracing::debug!(
        search = %query.search_term,
        category = %query.category,
        sort_by = %query.sort_by,
        group_by_date = query.group_by_date,
        "running query"
    );

    let view = execute(collection.items(), &query)?;
    tracing::info!(matched = view.len(), total = collection.len(), "query complete");

    let per_page = opts.per_page.unwrap_or(config.query.per_page);
    let output = shape_view(
        view,
        opts.page,
        per_page,
        today,
        config.display.older_after_days,
    );

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_output(&output);
    Ok(())
}

fn print_output(output: &QueryOutput<'_>) {
    match output {
        QueryOutput::Flat { page } => {
            if page.total_items == 0 {
                println!("No results.");
                return;
            }
            let offset = (page.page - 1).saturating_mul(page.per_page);
            for (i, item) in page.items.iter().enumerate() {
                print_item(offset.saturating_add(i + 1), item);
            }
            println!("{}", page_footer(page));
        }
        QueryOutput::Grouped { buckets } => {
            if buckets.is_empty() {
                println!("No results.");
                return;
            }
            let mut n = 0;
            for bucket in buckets {
                println!("== {} ({}) ==", bucket.label, bucket.date);
                for item in &bucket.items {
                    n += 1;
                    print_item(n, item);
                }
            }
        }
    }
}

fn page_footer<T>(page: &Page<T>) -> String {
    let mut footer = format!(
        "Page {} of {} ({} items)",
        page.page, page.total_pages, page.total_items
    );
    if page.has_prev() {
        footer.push_str(&format!(" | prev: --page {}", page.page - 1));
    }
    if page.has_next() {
        footer.push_str(&format!(" | next: --page {}", page.page + 1));
    }
    footer
}

fn print_item(n: usize, item: &ContentItem) {
    println!(
        "{}. [{}] {} / {}",
        n, item.published_at, item.category, item.title
    );
    if !item.tags.is_empty() {
        println!("    tags: {}", item.tags.join(", "));
    }
    if let Some(ref m) = item.metrics {
        println!(
            "    views: {}  likes: {}  downloads: {}",
            m.views, m.likes, m.downloads
        );
    }
    println!("    id: {}", item.id);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_hub_core::ContentCollection;

    fn fixture() -> ContentCollection {
        ContentCollection::new(vec![
            ContentItem::new("a", "Alpha", "News", "2025-03-10"),
            ContentItem::new("b", "Beta", "News", "2025-03-09"),
            ContentItem::new("c", "Gamma", "Physics", "2025-03-01"),
        ])
    }

    #[test]
    fn test_build_query_uses_config_defaults() {
        let mut config = Config::minimal();
        config.query.default_sort = "alphabetical".to_string();
        config.query.popular_metric = PopularityMetric::Likes;

        let query = build_query(&config, &QueryOptions::default()).unwrap();
        assert_eq!(query.sort_by, "alphabetical");
        assert_eq!(query.category, "All");
        assert_eq!(query.search_term, "");
        assert_eq!(query.popular_metric, PopularityMetric::Likes);
    }

    #[test]
    fn test_build_query_flags_override() {
        let opts = QueryOptions {
            search: Some("exam".to_string()),
            category: Some("Physics".to_string()),
            sort: Some("oldest".to_string()),
            metric: Some("downloads".to_string()),
            group_by_date: true,
            ..Default::default()
        };
        let query = build_query(&Config::minimal(), &opts).unwrap();
        assert_eq!(query.search_term, "exam");
        assert_eq!(query.category, "Physics");
        assert_eq!(query.sort_by, "oldest");
        assert_eq!(query.popular_metric, PopularityMetric::Downloads);
        assert!(query.group_by_date);
    }

    #[test]
    fn test_build_query_rejects_unknown_metric() {
        let opts = QueryOptions {
            metric: Some("shares".to_string()),
            ..Default::default()
        };
        assert!(build_query(&Config::minimal(), &opts).is_err());
    }

    #[test]
    fn test_reference_day_parse() {
        let opts = QueryOptions {
            today: Some("2025-03-10".to_string()),
            ..Default::default()
        };
        assert_eq!(
            reference_day(&opts).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );

        let bad = QueryOptions {
            today: Some("10/03/2025".to_string()),
            ..Default::default()
        };
        assert!(reference_day(&bad).is_err());
    }

    #[test]
    fn test_shape_flat_paginates() {
        let collection = fixture();
        let view = execute(collection.items(), &Query::default()).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let QueryOutput::Flat { page } = shape_view(view, 2, 2, today, 7) else {
            panic!("expected flat output");
        };
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);
        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_page_footer_hints() {
        let items = vec![1, 2, 3, 4, 5];

        assert_eq!(
            page_footer(&paginate(&items, 1, 2)),
            "Page 1 of 3 (5 items) | next: --page 2"
        );
        assert_eq!(
            page_footer(&paginate(&items, 2, 2)),
            "Page 2 of 3 (5 items) | prev: --page 1 | next: --page 3"
        );
        assert_eq!(
            page_footer(&paginate(&items, 3, 2)),
            "Page 3 of 3 (5 items) | prev: --page 2"
        );
    }

    #[test]
    fn test_page_footer_far_past_end() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, usize::MAX, 10);
        assert!(page.items.is_empty());
        assert_eq!(
            page_footer(&page),
            format!("Page {} of 1 (3 items) | prev: --page {}", usize::MAX, usize::MAX - 1)
        );
    }

    #[test]
    fn test_shape_grouped_labels() {
        let collection = fixture();
        let view = execute(collection.items(), &Query::default().grouped(true)).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let QueryOutput::Grouped { buckets } = shape_view(view, 1, 10, today, 7) else {
            panic!("expected grouped output");
        };
        let labels: Vec<DayLabel> = buckets.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![DayLabel::Today, DayLabel::Yesterday, DayLabel::Older]
        );
    }
}
