//! Options command — rank product options by sale count.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use storelens_core::analysis::options;

use crate::ingest;

/// Arguments for the `options` subcommand.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Option file to analyze (CSV).
    pub file: Utf8PathBuf,

    /// How many options to keep.
    #[arg(long, default_value_t = options::TOP_OPTIONS)]
    pub top: usize,
}

/// Rank an option export by sale count.
#[instrument(name = "cmd_options", skip_all, fields(file = %args.file))]
pub fn cmd_options(
    args: OptionsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = args.top, "executing options command");

    let rows = ingest::load_options(&args.file, max_input_bytes)?;
    let report = options::rank_options(&rows, args.top);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    if report.options.is_empty() {
        println!("no rankable options in {}", args.file);
        return Ok(());
    }

    println!(
        "{} top {} of {} options",
        "OPTIONS:".green(),
        report.options.len(),
        rows.len()
    );
    for option in &report.options {
        println!("{:>4}. {:>10}  {}", option.rank, option.count, option.label);
    }

    Ok(())
}
