//! Built-in sample collection and `hub init`.
//!
//! The sample set mixes news articles and previous-year question papers so
//! that every filter, sort key, and grouping mode has something to show
//! without a data file.

use anyhow::{bail, Context, Result};

use content_hub_core::{ContentCollection, ContentItem, ContentKind, Metrics};

use crate::config::Config;

fn metrics(views: u64, likes: u64, downloads: u64) -> Metrics {
    Metrics {
        views,
        likes,
        downloads,
    }
}

/// The canned collection served when no `[data].path` is configured.
pub fn sample_collection() -> ContentCollection {
    let items = vec![
        ContentItem::new("news-001", "JEE Main 2025 Session 1 Results Declared", "Exam Results", "2025-02-11")
            .with_description("NTA has published scorecards and the final answer key for session one.")
            .with_tags(["JEE", "results", "NTA"])
            .with_metrics(metrics(15420, 892, 0)),
        ContentItem::new("news-002", "NEET UG 2025 Registration Opens", "Announcements", "2025-02-11")
            .with_description("Candidates can apply online until March 7. The exam is scheduled for May 4.")
            .with_tags(["NEET", "registration", "medical"])
            .with_metrics(metrics(12087, 640, 0)),
        ContentItem::new("news-003", "CBSE Class 12 Date Sheet Revised", "Announcements", "2025-02-10")
            .with_description("Two papers have moved to accommodate regional holidays.")
            .with_tags(["CBSE", "board exams", "schedule"])
            .with_metrics(metrics(9310, 402, 0)),
        ContentItem::new("news-004", "Scholarship Portal Deadline Extended", "Scholarships", "2025-02-08")
            .with_description("The national scholarship window now closes at the end of the month.")
            .with_tags(["scholarship", "deadline"])
            .with_metrics(metrics(4120, 198, 0)),
        ContentItem::new("news-005", "How to Plan the Last 30 Days Before Your Exam", "Study Tips", "2025-02-05")
            .with_description("A week-by-week revision plan built around previous-year papers.")
            .with_tags(["revision", "strategy"])
            .with_metrics(metrics(7733, 1204, 0)),
        ContentItem::new("news-006", "GATE 2025 Answer Key Challenge Window", "Exam Results", "2025-01-30")
            .with_description("Objections can be raised against provisional keys for a fee per question.")
            .with_tags(["GATE", "answer key"])
            .with_metrics(metrics(5608, 233, 0)),
        ContentItem::new("pyq-phy-2024", "JEE Main 2024 Physics Paper", "Physics", "2025-02-10")
            .with_description("Shift 1 question paper with official answer key.")
            .with_tags(["JEE", "mechanics", "electrostatics"])
            .with_metrics(metrics(8800, 512, 3920))
            .with_kind(ContentKind::QuestionPaper),
        ContentItem::new("pyq-phy-2023", "JEE Main 2023 Physics Paper", "Physics", "2025-01-22")
            .with_description("Shift 2 question paper with detailed solutions.")
            .with_tags(["JEE", "optics", "modern physics"])
            .with_metrics(metrics(6402, 388, 3011))
            .with_kind(ContentKind::QuestionPaper),
        ContentItem::new("pyq-chem-2024", "NEET 2024 Chemistry Paper", "Chemistry", "2025-02-08")
            .with_description("Complete paper covering physical, organic, and inorganic sections.")
            .with_tags(["NEET", "organic", "inorganic"])
            .with_metrics(metrics(7120, 430, 2876))
            .with_kind(ContentKind::QuestionPaper),
        ContentItem::new("pyq-math-2024", "JEE Advanced 2024 Mathematics Paper 1", "Mathematics", "2025-02-03")
            .with_description("Paper 1 with marking scheme and topic-wise breakdown.")
            .with_tags(["JEE Advanced", "calculus", "algebra"])
            .with_metrics(metrics(5310, 275, 2450))
            .with_kind(ContentKind::QuestionPaper),
        ContentItem::new("pyq-bio-2023", "NEET 2023 Biology Paper", "Biology", "2025-01-15")
            .with_description("Botany and zoology sections with answer key.")
            .with_tags(["NEET", "genetics", "ecology"])
            .with_metrics(metrics(6050, 301, 2990))
            .with_kind(ContentKind::QuestionPaper),
        ContentItem::new("pyq-math-2023", "CBSE Class 12 Mathematics 2023", "Mathematics", "2025-01-15")
            .with_description("Board exam paper, all three sets.")
            .with_tags(["CBSE", "board exams", "probability"])
            .with_kind(ContentKind::QuestionPaper),
    ];

    ContentCollection::new(items)
}

/// Write the sample collection to `[data].path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init(config: &Config, force: bool) -> Result<()> {
    let Some(path) = config.data.path.as_deref() else {
        bail!("[data].path must be set in the config to write a collection file");
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let collection = sample_collection();
    let json = serde_json::to_string_pretty(&collection)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write collection file: {}", path.display()))?;

    tracing::info!(path = %path.display(), items = collection.len(), "wrote sample collection");
    println!(
        "Wrote {} sample items to {}",
        collection.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_collection_is_valid() {
        let collection = sample_collection();
        assert!(!collection.is_empty());
        collection.validate().unwrap();
    }

    #[test]
    fn test_sample_has_both_kinds() {
        let collection = sample_collection();
        let items = collection.items();
        assert!(items.iter().any(|i| i.kind == ContentKind::News));
        assert!(items.iter().any(|i| i.kind == ContentKind::QuestionPaper));
    }
}
