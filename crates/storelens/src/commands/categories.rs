//! Categories command — per-sentiment category breakdown.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use storelens_core::analysis::categories::{self, CategoryCatalog, MatchStrategy};
use storelens_core::analysis::sentiment;
use storelens_core::records::Sentiment;

use crate::ingest;

/// Arguments for the `categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Review file to analyze (CSV).
    pub file: Utf8PathBuf,

    /// Sentiment bucket to break down.
    #[arg(long, value_enum, default_value_t = Sentiment::Positive)]
    pub sentiment: Sentiment,

    /// Category catalog file (overrides the configured one).
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<Utf8PathBuf>,

    /// Keyword matching strategy (overrides the configured one).
    #[arg(long, value_enum)]
    pub strategy: Option<MatchStrategy>,
}

/// Break one sentiment bucket of a review export down by category.
#[instrument(name = "cmd_categories", skip_all, fields(file = %args.file))]
pub fn cmd_categories(
    args: CategoriesArgs,
    global_json: bool,
    config_catalog: &CategoryCatalog,
    config_strategy: MatchStrategy,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, sentiment = %args.sentiment, "executing categories command");

    let catalog = match args.catalog {
        Some(ref path) => CategoryCatalog::from_file(path)
            .with_context(|| format!("failed to load category catalog {path}"))?,
        None => config_catalog.clone(),
    };
    let strategy = args.strategy.unwrap_or(config_strategy);

    let reviews = ingest::load_reviews(&args.file, max_input_bytes)?;
    let tokenizer = super::tokenizer()?;
    let scored = sentiment::analyze_sentiment(&reviews, &tokenizer);
    let report =
        categories::analyze_categories(&scored.reviews, args.sentiment, &catalog, strategy);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    if report.rows.is_empty() {
        println!(
            "no {} reviews matched any category ({} in bucket)",
            report.sentiment, report.total_reviews
        );
        return Ok(());
    }

    println!(
        "{} {} categories across {} {} reviews",
        "CATEGORIES:".green(),
        report.rows.len(),
        report.total_reviews,
        report.sentiment,
    );
    for row in &report.rows {
        println!(
            "{:>6}  {:>5.1}%  {}  [{}]",
            row.review_count,
            row.percentage,
            row.category,
            row.top_keywords.join(", "),
        );
    }

    Ok(())
}
