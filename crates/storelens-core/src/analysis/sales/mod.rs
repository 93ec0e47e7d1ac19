//! Sales-performance analytics over the per-product sales table.
//!
//! Every operation here excludes synthetic total rows first and returns
//! a typed-empty result (`Vec::new()` / `None`) when required columns
//! are absent or the filtered set is empty — degenerate data never
//! raises.

pub mod insights;
pub mod stats;

use crate::records::{SalesPeriod, SalesRecord, SalesTable, is_total_row};

use super::reports::{
    PeriodSummary, PriceEfficiencyEntry, PriceSegment, RankedProduct, ReviewSalesCorrelation,
    ScoreBucket,
};

/// Ranking depth shared by the revenue and efficiency rankings.
pub const TOP_PRODUCTS: usize = 10;

/// Minimum priced rows for quartile segmentation.
const MIN_SEGMENT_ROWS: usize = 4;

/// Periods present in the table, in vocabulary order.
///
/// Vocabulary order, never source column order.
pub fn available_periods(table: &SalesTable) -> Vec<SalesPeriod> {
    SalesPeriod::ALL
        .iter()
        .copied()
        .filter(|p| table.periods.contains(p))
        .collect()
}

/// Product rows with synthetic total rows excluded.
pub fn product_rows(table: &SalesTable) -> Vec<&SalesRecord> {
    table
        .rows
        .iter()
        .filter(|r| !is_total_row(&r.product_name))
        .collect()
}

/// Top `n` products by revenue for a period.
///
/// Only rows with strictly positive revenue participate. Stable sort:
/// equal revenues keep source row order.
#[tracing::instrument(skip_all, fields(period = %period, n))]
pub fn top_products(table: &SalesTable, period: SalesPeriod, n: usize) -> Vec<RankedProduct> {
    let mut rows: Vec<(&SalesRecord, f64)> = product_rows(table)
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            (revenue > 0.0).then_some((r, revenue))
        })
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    rows.into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (record, revenue))| RankedProduct {
            rank: i + 1,
            product_name: record.product_name.clone(),
            revenue,
            base_price: record.base_price,
            sale_count: record.sale_count,
        })
        .collect()
}

/// Top 10 products by revenue-to-price ratio for a period.
///
/// Requires both revenue and base price, both strictly positive.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn price_efficiency(table: &SalesTable, period: SalesPeriod) -> Vec<PriceEfficiencyEntry> {
    let mut entries: Vec<PriceEfficiencyEntry> = product_rows(table)
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            let base_price = r.base_price?;
            (revenue > 0.0 && base_price > 0.0).then(|| PriceEfficiencyEntry {
                product_name: r.product_name.clone(),
                revenue,
                base_price,
                efficiency: revenue / base_price,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    entries.truncate(TOP_PRODUCTS);
    entries
}

/// Quartile-based price segmentation for a period.
///
/// Needs at least 4 rows with a positive price; otherwise empty. The
/// four half-open buckets are `[0,Q1) [Q1,Q2) [Q2,Q3) [Q3,inf)` over
/// the price distribution of the filtered rows.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn price_segments(table: &SalesTable, period: SalesPeriod) -> Vec<PriceSegment> {
    let priced: Vec<&SalesRecord> = product_rows(table)
        .into_iter()
        .filter(|r| r.base_price.is_some_and(|p| p > 0.0))
        .collect();
    if priced.len() < MIN_SEGMENT_ROWS {
        return Vec::new();
    }

    let prices = stats::sorted(
        &priced
            .iter()
            .filter_map(|r| r.base_price)
            .collect::<Vec<_>>(),
    );
    let q1 = stats::percentile(&prices, 25.0);
    let q2 = stats::percentile(&prices, 50.0);
    let q3 = stats::percentile(&prices, 75.0);

    let bounds: [(f64, Option<f64>); 4] = [
        (0.0, Some(q1)),
        (q1, Some(q2)),
        (q2, Some(q3)),
        (q3, None),
    ];

    bounds
        .into_iter()
        .map(|(lower, upper)| {
            let members: Vec<&&SalesRecord> = priced
                .iter()
                .filter(|r| {
                    let price = r.base_price.unwrap_or(0.0);
                    price >= lower && upper.is_none_or(|u| price < u)
                })
                .collect();
            let revenues: Vec<f64> = members
                .iter()
                .filter_map(|r| r.revenue_for(period))
                .collect();
            let label = match upper {
                Some(u) => format!("{lower:.0}-{u:.0}"),
                None => format!("{lower:.0}+"),
            };
            PriceSegment {
                label,
                lower,
                upper,
                product_count: members.len(),
                mean_revenue: stats::mean(&revenues),
                total_revenue: revenues.iter().sum(),
                revenue_rows: revenues.len(),
            }
        })
        .collect()
}

/// Fixed review-score bucket boundaries: `[lower, upper)`, the last
/// bucket closed at 5.0.
const SCORE_BUCKETS: [(f64, f64, &str); 4] = [
    (0.0, 3.0, "<3.0"),
    (3.0, 4.0, "3.0-4.0"),
    (4.0, 4.5, "4.0-4.5"),
    (4.5, 5.0, "4.5-5.0"),
];

/// Pearson correlation of review score vs revenue, with the fixed
/// score-bucket aggregation.
///
/// `None` when fewer than two rows carry both fields, or when either
/// sample is constant (coefficient undefined).
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn review_correlation(
    table: &SalesTable,
    period: SalesPeriod,
) -> Option<ReviewSalesCorrelation> {
    let paired: Vec<&SalesRecord> = product_rows(table)
        .into_iter()
        .filter(|r| r.review_score.is_some() && r.revenue_for(period).is_some())
        .collect();

    let scores: Vec<f64> = paired.iter().filter_map(|r| r.review_score).collect();
    let revenues: Vec<f64> = paired
        .iter()
        .filter_map(|r| r.revenue_for(period))
        .collect();
    let coefficient = stats::pearson(&scores, &revenues)?;

    let buckets = SCORE_BUCKETS
        .iter()
        .filter_map(|&(lower, upper, label)| {
            let members: Vec<&&SalesRecord> = paired
                .iter()
                .filter(|r| {
                    let score = r.review_score.unwrap_or(0.0);
                    // Last bucket includes the 5.0 endpoint.
                    score >= lower && (score < upper || (upper == 5.0 && score == 5.0))
                })
                .collect();
            if members.is_empty() {
                return None;
            }
            let member_revenues: Vec<f64> = members
                .iter()
                .filter_map(|r| r.revenue_for(period))
                .collect();
            let review_counts: Vec<f64> = members.iter().filter_map(|r| r.review_count).collect();
            Some(ScoreBucket {
                label: label.to_string(),
                product_count: members.len(),
                mean_revenue: stats::mean(&member_revenues),
                mean_review_count: (!review_counts.is_empty())
                    .then(|| stats::mean(&review_counts)),
            })
        })
        .collect();

    Some(ReviewSalesCorrelation {
        coefficient,
        sample_size: paired.len(),
        buckets,
    })
}

/// Descriptive revenue statistics for a period.
///
/// Total rows and non-positive revenues excluded; `None` when nothing
/// remains.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn summary_stats(table: &SalesTable, period: SalesPeriod) -> Option<PeriodSummary> {
    let revenues = stats::sorted(
        &product_rows(table)
            .into_iter()
            .filter_map(|r| r.revenue_for(period))
            .filter(|&v| v > 0.0)
            .collect::<Vec<_>>(),
    );
    if revenues.is_empty() {
        return None;
    }
    Some(PeriodSummary {
        period,
        total: revenues.iter().sum(),
        mean: stats::mean(&revenues),
        median: stats::median(&revenues),
        max: *revenues.last().expect("non-empty"),
        min: *revenues.first().expect("non-empty"),
        count: revenues.len(),
        p90: stats::percentile(&revenues, 90.0),
    })
}
