//! Sales command — full sales-performance analysis for one period.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use storelens_core::analysis::reports::{
    PeriodSummary, PriceEfficiencyEntry, PriceSegment, RankedProduct, ReviewSalesCorrelation,
    SalesInsightsReport,
};
use storelens_core::analysis::sales::{self, insights};
use storelens_core::records::SalesPeriod;

use crate::ingest;

/// Arguments for the `sales` subcommand.
#[derive(Args, Debug)]
pub struct SalesArgs {
    /// Sales file to analyze (CSV).
    pub file: Utf8PathBuf,

    /// Period to analyze. Defaults to 1-year when present, otherwise
    /// the last available period.
    #[arg(long, value_enum)]
    pub period: Option<SalesPeriod>,

    /// How many products the revenue ranking keeps.
    #[arg(long, default_value_t = sales::TOP_PRODUCTS)]
    pub top: usize,
}

/// Everything the sales analysis produces for one period.
#[derive(Debug, Serialize)]
struct SalesReport {
    period: SalesPeriod,
    available_periods: Vec<SalesPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<PeriodSummary>,
    top_products: Vec<RankedProduct>,
    price_efficiency: Vec<PriceEfficiencyEntry>,
    price_segments: Vec<PriceSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation: Option<ReviewSalesCorrelation>,
    insights: SalesInsightsReport,
}

/// Analyze a sales export for one period.
#[instrument(name = "cmd_sales", skip_all, fields(file = %args.file))]
pub fn cmd_sales(
    args: SalesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, period = ?args.period, "executing sales command");

    let table = ingest::load_sales(&args.file, max_input_bytes)?;
    let available = sales::available_periods(&table);
    let Some(period) = args.period.or_else(|| default_period(&available)) else {
        anyhow::bail!("{} carries no known revenue periods", args.file);
    };
    if !available.contains(&period) {
        anyhow::bail!(
            "{} has no {period} revenue column (available: {})",
            args.file,
            available
                .iter()
                .map(SalesPeriod::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let report = SalesReport {
        period,
        available_periods: available,
        summary: sales::summary_stats(&table, period),
        top_products: sales::top_products(&table, period, args.top),
        price_efficiency: sales::price_efficiency(&table, period),
        price_segments: sales::price_segments(&table, period),
        correlation: sales::review_correlation(&table, period),
        insights: insights::analyze_sales_insights(&table, period),
    };

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    print_human(&report);
    Ok(())
}

/// 1-year when present, otherwise the last available period.
fn default_period(available: &[SalesPeriod]) -> Option<SalesPeriod> {
    if available.contains(&SalesPeriod::OneYear) {
        return Some(SalesPeriod::OneYear);
    }
    available.last().copied()
}

fn print_human(report: &SalesReport) {
    println!("{} period {}", "SALES:".green(), report.period);

    match &report.summary {
        Some(s) => println!(
            "  {} products | total {:.0} | mean {:.0} | median {:.0} | min {:.0} | max {:.0} | p90 {:.0}",
            s.count, s.total, s.mean, s.median, s.min, s.max, s.p90
        ),
        None => println!("  no positive revenue rows for this period"),
    }

    if !report.top_products.is_empty() {
        println!("\n{}", "revenue ranking".bold());
        for p in &report.top_products {
            let price = p
                .base_price
                .map_or_else(String::new, |v| format!("  price {v:.0}"));
            println!("{:>4}. {:>12.0}  {}{}", p.rank, p.revenue, p.product_name, price);
        }
    }

    if !report.price_efficiency.is_empty() {
        println!("\n{}", "price efficiency (revenue / price)".bold());
        for e in &report.price_efficiency {
            println!("{:>10.1}  {}", e.efficiency, e.product_name);
        }
    }

    if !report.price_segments.is_empty() {
        println!("\n{}", "price segments (quartiles)".bold());
        for s in &report.price_segments {
            println!(
                "{:>14}  {:>3} products  mean revenue {:>12.0}  total {:>14.0}",
                s.label, s.product_count, s.mean_revenue, s.total_revenue
            );
        }
    }

    if let Some(ref c) = report.correlation {
        println!("\n{}", "review score vs revenue".bold());
        println!("  pearson r = {:.3} over {} products", c.coefficient, c.sample_size);
        for b in &c.buckets {
            println!(
                "{:>10}  {:>3} products  mean revenue {:>12.0}",
                b.label, b.product_count, b.mean_revenue
            );
        }
    }

    let i = &report.insights;
    if !i.review_efficiency.is_empty() {
        println!("\n{}", "revenue per review".bold());
        for e in &i.review_efficiency {
            println!("{:>12.0}  {}", e.revenue_per_review, e.product_name);
        }
    }
    if !i.hidden_gems.is_empty() {
        println!("\n{}", "hidden gems (score >= 4.5, revenue <= median)".bold());
        for g in &i.hidden_gems {
            println!("{:>6.1}  {:>12.0}  {}", g.review_score, g.revenue, g.product_name);
        }
    }
    if !i.underperforming.is_empty() {
        println!("\n{}", "underperforming (score >= 4.0, revenue < p75)".bold());
        for g in &i.underperforming {
            println!("{:>6.1}  {:>12.0}  {}", g.review_score, g.revenue, g.product_name);
        }
    }
    if !i.review_needed.is_empty() {
        println!("\n{}", "review needed (high revenue, few reviews)".bold());
        for e in &i.review_needed {
            println!("{:>12.0}  {:>6.0} reviews  {}", e.revenue, e.review_count, e.product_name);
        }
    }
    if !i.value_picks.is_empty() {
        println!("\n{}", "value picks (cheap, well reviewed)".bold());
        for v in &i.value_picks {
            println!("{:>6.2}  price {:>8.0}  {}", v.value_score, v.base_price, v.product_name);
        }
    }
}
