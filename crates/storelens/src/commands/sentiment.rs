//! Sentiment command — classify reviews into sentiment buckets.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use storelens_core::analysis::sentiment;

use crate::ingest;

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug)]
pub struct SentimentArgs {
    /// Review file to analyze (CSV).
    pub file: Utf8PathBuf,

    /// Also print each review with its score.
    #[arg(long)]
    pub scores: bool,
}

/// Classify a review export and print the per-bucket tallies.
#[instrument(name = "cmd_sentiment", skip_all, fields(file = %args.file))]
pub fn cmd_sentiment(
    args: SentimentArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing sentiment command");

    let reviews = ingest::load_reviews(&args.file, max_input_bytes)?;
    let tokenizer = super::tokenizer()?;
    let report = sentiment::analyze_sentiment(&reviews, &tokenizer);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    println!(
        "{} {} reviews classified",
        "SENTIMENT:".green(),
        report.reviews.len()
    );
    for count in &report.counts {
        let share = if report.reviews.is_empty() {
            0.0
        } else {
            count.reviews as f64 / report.reviews.len() as f64 * 100.0
        };
        println!("{:>10}  {:>5}  ({share:.1}%)", count.sentiment, count.reviews);
    }

    if args.scores {
        println!();
        for review in &report.reviews {
            let text = review.text.as_deref().unwrap_or("(empty)");
            println!(
                "{:>8.3}  {:>8}  {}",
                review.sentiment_score, review.sentiment, text
            );
        }
    }

    Ok(())
}
