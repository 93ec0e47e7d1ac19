//! Keywords command — review keyword frequency ranking.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use storelens_core::analysis::frequency;
use storelens_core::stopwords::StopwordSet;

use crate::ingest;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Review file to analyze (CSV).
    pub file: Utf8PathBuf,

    /// Print the full frequency table, not just the top 20.
    #[arg(long)]
    pub all: bool,
}

/// Rank the most frequent keywords across a review export.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    stopwords: &StopwordSet,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, all = args.all, "executing keywords command");

    let reviews = ingest::load_reviews(&args.file, max_input_bytes)?;
    let tokenizer = super::tokenizer()?;
    let report = frequency::analyze_keyword_frequency(&reviews, &tokenizer, stopwords);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    if report.top.is_empty() {
        println!("no keywords found in {}", args.file);
        return Ok(());
    }

    println!(
        "{} {} keywords across {} reviews ({} tokens)",
        "KEYWORDS:".green(),
        report.counts.len(),
        reviews.len(),
        report.total_tokens,
    );
    let rows = if args.all { &report.counts } else { &report.top };
    for entry in rows {
        println!("{:>6}  {}", entry.count, entry.keyword);
    }

    Ok(())
}
