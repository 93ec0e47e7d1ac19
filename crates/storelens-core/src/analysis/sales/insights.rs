//! Review/sales cross-insights.
//!
//! Five independent derivations over the same filtered table. Filter
//! medians and percentiles are computed over the total-excluded rows
//! that carry the field in question for the chosen period.

use crate::analysis::reports::{
    ReviewEfficiencyEntry, ReviewNeededEntry, SalesInsightsReport, ScoredProduct, ValuePick,
};
use crate::records::{SalesPeriod, SalesTable};

use super::{TOP_PRODUCTS, product_rows, stats};

/// Review-score floor for hidden gems.
const GEM_SCORE: f64 = 4.5;

/// Review-score floor for underperforming and value picks.
const GOOD_SCORE: f64 = 4.0;

/// Top products by revenue per review.
///
/// Rows need strictly positive revenue and review count.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn review_efficiency(table: &SalesTable, period: SalesPeriod) -> Vec<ReviewEfficiencyEntry> {
    let mut entries: Vec<ReviewEfficiencyEntry> = product_rows(table)
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            let review_count = r.review_count?;
            (revenue > 0.0 && review_count > 0.0).then(|| ReviewEfficiencyEntry {
                product_name: r.product_name.clone(),
                revenue,
                review_count,
                revenue_per_review: revenue / review_count,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.revenue_per_review.total_cmp(&a.revenue_per_review));
    entries.truncate(TOP_PRODUCTS);
    entries
}

/// Well-reviewed products with below-median revenue — candidates for
/// marketing investment.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn hidden_gems(table: &SalesTable, period: SalesPeriod) -> Vec<ScoredProduct> {
    scored_filter(table, period, GEM_SCORE, |revenue, median_revenue| {
        revenue <= median_revenue
    })
}

/// Well-reviewed products with revenue under the 75th percentile.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn underperforming(table: &SalesTable, period: SalesPeriod) -> Vec<ScoredProduct> {
    let rows = product_rows(table);
    let revenues = stats::sorted(
        &rows
            .iter()
            .filter_map(|r| r.revenue_for(period))
            .collect::<Vec<_>>(),
    );
    if revenues.is_empty() {
        return Vec::new();
    }
    let p75 = stats::percentile(&revenues, 75.0);

    let mut out: Vec<ScoredProduct> = rows
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            let review_score = r.review_score?;
            (review_score >= GOOD_SCORE && revenue < p75).then(|| ScoredProduct {
                product_name: r.product_name.clone(),
                review_score,
                revenue,
            })
        })
        .collect();
    out.sort_by(|a, b| b.review_score.total_cmp(&a.review_score));
    out.truncate(TOP_PRODUCTS);
    out
}

/// High-revenue products with few reviews, ranked by
/// `revenue / (review_count + 1)` (the +1 keeps zero-review rows
/// rankable without a division guard).
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn review_needed(table: &SalesTable, period: SalesPeriod) -> Vec<ReviewNeededEntry> {
    let rows = product_rows(table);
    let revenues = stats::sorted(
        &rows
            .iter()
            .filter_map(|r| r.revenue_for(period))
            .collect::<Vec<_>>(),
    );
    let counts = stats::sorted(
        &rows
            .iter()
            .filter_map(|r| r.review_count)
            .collect::<Vec<_>>(),
    );
    if revenues.is_empty() || counts.is_empty() {
        return Vec::new();
    }
    let median_revenue = stats::median(&revenues);
    let median_count = stats::median(&counts);

    let mut out: Vec<ReviewNeededEntry> = rows
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            let review_count = r.review_count?;
            (revenue >= median_revenue && review_count <= median_count).then(|| {
                ReviewNeededEntry {
                    product_name: r.product_name.clone(),
                    revenue,
                    review_count,
                    potential: revenue / (review_count + 1.0),
                }
            })
        })
        .collect();
    out.sort_by(|a, b| b.potential.total_cmp(&a.potential));
    out.truncate(TOP_PRODUCTS);
    out
}

/// Cheap, well-reviewed products scored by
/// `(1 - normalized_price) * review_score`, where the price is min-max
/// scaled within the filtered subset (0 when all prices are equal).
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn value_picks(table: &SalesTable, period: SalesPeriod) -> Vec<ValuePick> {
    let rows = product_rows(table);
    let prices = stats::sorted(
        &rows
            .iter()
            .filter_map(|r| r.base_price)
            .collect::<Vec<_>>(),
    );
    if prices.is_empty() {
        return Vec::new();
    }
    let median_price = stats::median(&prices);

    let filtered: Vec<(&str, f64, f64)> = rows
        .into_iter()
        .filter_map(|r| {
            let base_price = r.base_price?;
            let review_score = r.review_score?;
            (base_price <= median_price && review_score >= GOOD_SCORE)
                .then_some((r.product_name.as_str(), base_price, review_score))
        })
        .collect();
    if filtered.is_empty() {
        return Vec::new();
    }

    let min_price = filtered
        .iter()
        .map(|&(_, p, _)| p)
        .fold(f64::INFINITY, f64::min);
    let max_price = filtered
        .iter()
        .map(|&(_, p, _)| p)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max_price - min_price;

    let mut out: Vec<ValuePick> = filtered
        .into_iter()
        .map(|(name, base_price, review_score)| {
            let normalized = if span > 0.0 {
                (base_price - min_price) / span
            } else {
                0.0
            };
            ValuePick {
                product_name: name.to_string(),
                base_price,
                review_score,
                value_score: (1.0 - normalized) * review_score,
            }
        })
        .collect();
    out.sort_by(|a, b| b.value_score.total_cmp(&a.value_score));
    out.truncate(TOP_PRODUCTS);
    out
}

/// All five insights for one period.
#[tracing::instrument(skip_all, fields(period = %period))]
pub fn analyze_sales_insights(table: &SalesTable, period: SalesPeriod) -> SalesInsightsReport {
    SalesInsightsReport {
        review_efficiency: review_efficiency(table, period),
        hidden_gems: hidden_gems(table, period),
        underperforming: underperforming(table, period),
        review_needed: review_needed(table, period),
        value_picks: value_picks(table, period),
    }
}

/// Shared shape of the gem filter: score floor + revenue-vs-median
/// predicate, sorted by score descending.
fn scored_filter(
    table: &SalesTable,
    period: SalesPeriod,
    score_floor: f64,
    keep: impl Fn(f64, f64) -> bool,
) -> Vec<ScoredProduct> {
    let rows = product_rows(table);
    let revenues = stats::sorted(
        &rows
            .iter()
            .filter_map(|r| r.revenue_for(period))
            .collect::<Vec<_>>(),
    );
    if revenues.is_empty() {
        return Vec::new();
    }
    let median_revenue = stats::median(&revenues);

    let mut out: Vec<ScoredProduct> = rows
        .into_iter()
        .filter_map(|r| {
            let revenue = r.revenue_for(period)?;
            let review_score = r.review_score?;
            (review_score >= score_floor && keep(revenue, median_revenue)).then(|| ScoredProduct {
                product_name: r.product_name.clone(),
                review_score,
                revenue,
            })
        })
        .collect();
    out.sort_by(|a, b| b.review_score.total_cmp(&a.review_score));
    out.truncate(TOP_PRODUCTS);
    out
}

#[cfg(test)]
mod tests {
    use crate::records::SalesRecord;

    use super::*;

    const YEAR: SalesPeriod = SalesPeriod::OneYear;

    fn product(
        name: &str,
        revenue: f64,
        price: Option<f64>,
        score: Option<f64>,
        reviews: Option<f64>,
    ) -> SalesRecord {
        let mut r = SalesRecord {
            product_name: name.to_string(),
            base_price: price,
            review_score: score,
            review_count: reviews,
            ..Default::default()
        };
        r.revenue.insert(YEAR, revenue);
        r
    }

    fn fixture() -> SalesTable {
        SalesTable {
            periods: vec![YEAR],
            rows: vec![
                product("베스트셀러", 10_000.0, Some(100.0), Some(4.2), Some(500.0)),
                product("숨은 보석", 1_000.0, Some(50.0), Some(4.9), Some(20.0)),
                product("평범", 4_000.0, Some(80.0), Some(3.0), Some(100.0)),
                product("신제품", 8_000.0, Some(120.0), Some(4.6), Some(5.0)),
                product("전체 합계", 23_000.0, None, None, None),
            ],
        }
    }

    #[test]
    fn review_efficiency_ranks_by_revenue_per_review() {
        let entries = review_efficiency(&fixture(), YEAR);
        // 신제품: 8000/5 = 1600 leads.
        assert_eq!(entries[0].product_name, "신제품");
        assert!((entries[0].revenue_per_review - 1600.0).abs() < 1e-9);
        for pair in entries.windows(2) {
            assert!(pair[0].revenue_per_review >= pair[1].revenue_per_review);
        }
    }

    #[test]
    fn review_efficiency_skips_zero_counts() {
        let t = SalesTable {
            periods: vec![YEAR],
            rows: vec![product("무리뷰", 5_000.0, None, None, Some(0.0))],
        };
        assert!(review_efficiency(&t, YEAR).is_empty());
    }

    #[test]
    fn hidden_gems_high_score_low_revenue() {
        let gems = hidden_gems(&fixture(), YEAR);
        // Median revenue of {10000,1000,4000,8000} = 6000; gems need
        // score >= 4.5 and revenue <= 6000: only 숨은 보석.
        assert_eq!(gems.len(), 1);
        assert_eq!(gems[0].product_name, "숨은 보석");
    }

    #[test]
    fn underperforming_uses_p75() {
        let out = underperforming(&fixture(), YEAR);
        // p75 of {1000,4000,8000,10000} = 8500; score >= 4.0 and
        // revenue < 8500: 숨은 보석 (4.9) then 신제품 (4.6).
        let names: Vec<&str> = out.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["숨은 보석", "신제품"]);
    }

    #[test]
    fn review_needed_ranks_by_potential() {
        let out = review_needed(&fixture(), YEAR);
        // Median revenue 6000, median review count 60; revenue >= 6000
        // and reviews <= 60: only 신제품. potential = 8000/6.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_name, "신제품");
        assert!((out[0].potential - 8_000.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn value_picks_prefer_cheap_and_good() {
        let out = value_picks(&fixture(), YEAR);
        // Median price of {50,80,100,120} = 90; price <= 90 and score
        // >= 4.0: only 숨은 보석 -> all prices equal in subset, so
        // value = score.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_name, "숨은 보석");
        assert!((out[0].value_score - 4.9).abs() < 1e-9);
    }

    #[test]
    fn value_picks_minmax_scaling() {
        let t = SalesTable {
            periods: vec![YEAR],
            rows: vec![
                product("싼", 100.0, Some(10.0), Some(4.0), None),
                product("중간", 100.0, Some(20.0), Some(5.0), None),
                product("비싼", 100.0, Some(30.0), Some(4.5), None),
                product("최고가", 100.0, Some(40.0), Some(5.0), None),
            ],
        };
        let out = value_picks(&t, YEAR);
        // Median price 25: subset {싼 10/4.0, 중간 20/5.0}; span 10.
        // 싼: (1-0)*4.0 = 4.0; 중간: (1-1)*5.0 = 0.
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].product_name, "싼");
        assert!((out[0].value_score - 4.0).abs() < 1e-9);
        assert_eq!(out[1].value_score, 0.0);
    }

    #[test]
    fn totals_never_appear_in_insights() {
        let report = analyze_sales_insights(&fixture(), YEAR);
        let mut names: Vec<&str> = Vec::new();
        names.extend(report.review_efficiency.iter().map(|e| e.product_name.as_str()));
        names.extend(report.hidden_gems.iter().map(|e| e.product_name.as_str()));
        names.extend(report.underperforming.iter().map(|e| e.product_name.as_str()));
        names.extend(report.review_needed.iter().map(|e| e.product_name.as_str()));
        names.extend(report.value_picks.iter().map(|e| e.product_name.as_str()));
        assert!(!names.iter().any(|n| n.contains("합계")));
    }

    #[test]
    fn missing_columns_yield_empty_insights() {
        let t = SalesTable {
            periods: vec![YEAR],
            rows: vec![product("점수없음", 1_000.0, None, None, None)],
        };
        let report = analyze_sales_insights(&t, YEAR);
        assert!(report.review_efficiency.is_empty());
        assert!(report.hidden_gems.is_empty());
        assert!(report.underperforming.is_empty());
        assert!(report.review_needed.is_empty());
        assert!(report.value_picks.is_empty());
    }
}
