//! Review and sales analytics.
//!
//! Each analysis is a pure function in its own module, callable on its
//! own; [`run_review_analysis`] orchestrates the review-side checks.
//! The sales-side operations live under [`sales`] and are driven
//! per-period by callers.

pub mod categories;
pub mod frequency;
pub mod options;
pub mod reports;
pub mod sales;
pub mod sentiment;

use std::collections::HashSet;

pub use reports::ReviewAnalysisReport;

use crate::records::{ReviewRecord, Sentiment};
use crate::stopwords::StopwordSet;
use crate::text::MorphTokenizer;

use categories::{CategoryCatalog, MatchStrategy};

/// All available review check names.
pub const ALL_CHECKS: &[&str] = &["keywords", "sentiment", "categories"];

/// Run the review-side analyses.
///
/// # Arguments
///
/// * `reviews` — The review rows to analyze.
/// * `tokenizer` — Shared morphological tokenizer.
/// * `stopwords` — Stopword set for keyword extraction.
/// * `catalog` — Category trigger tables.
/// * `strategy` — Keyword matching policy for category tagging.
/// * `checks` — Optional list of check names to run. If `None`, runs all.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn run_review_analysis(
    reviews: &[ReviewRecord],
    tokenizer: &MorphTokenizer,
    stopwords: &StopwordSet,
    catalog: &CategoryCatalog,
    strategy: MatchStrategy,
    checks: Option<&[String]>,
) -> ReviewAnalysisReport {
    let enabled: HashSet<&str> = checks.map_or_else(
        || ALL_CHECKS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let keywords = enabled
        .contains("keywords")
        .then(|| frequency::analyze_keyword_frequency(reviews, tokenizer, stopwords));

    // Categories need the classified reviews even when the sentiment
    // report itself is not requested.
    let sentiment_report = (enabled.contains("sentiment") || enabled.contains("categories"))
        .then(|| sentiment::analyze_sentiment(reviews, tokenizer));

    let categories = enabled.contains("categories").then(|| {
        let scored = sentiment_report
            .as_ref()
            .map(|r| r.reviews.as_slice())
            .unwrap_or_default();
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
            .into_iter()
            .map(|s| categories::analyze_categories(scored, s, catalog, strategy))
            .collect()
    });

    ReviewAnalysisReport {
        keywords,
        sentiment: enabled
            .contains("sentiment")
            .then_some(())
            .and(sentiment_report),
        categories,
    }
}
