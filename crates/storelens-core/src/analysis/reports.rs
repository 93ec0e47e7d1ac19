//! Report structs for the analytics core.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and downstream consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::{SalesPeriod, ScoredReview, Sentiment};

/// Combined review analysis (keyword frequency + sentiment + categories).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewAnalysisReport {
    /// Keyword frequency table and top ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordFrequencyReport>,
    /// Sentiment classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,
    /// Per-sentiment category breakdowns (positive, neutral, negative).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryReport>>,
}

// -- Keyword frequency -------------------------------------------------------

/// A keyword with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordCount {
    /// The keyword.
    pub keyword: String,
    /// Number of occurrences across all reviews.
    pub count: usize,
}

/// Keyword frequency analysis over a review collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeywordFrequencyReport {
    /// Full frequency table, first-occurrence order.
    pub counts: Vec<KeywordCount>,
    /// Top 20 keywords, count descending, ties by first occurrence.
    pub top: Vec<KeywordCount>,
    /// Total retained tokens (duplicates included).
    pub total_tokens: usize,
}

// -- Sentiment ---------------------------------------------------------------

/// Review tally for one sentiment bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentCount {
    /// The bucket.
    pub sentiment: Sentiment,
    /// Number of reviews in it.
    pub reviews: usize,
}

/// Sentiment classification over a review collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SentimentReport {
    /// Every input review with its score and bucket.
    pub reviews: Vec<ScoredReview>,
    /// Per-bucket counts, ordered by first appearance while tallying.
    pub counts: Vec<SentimentCount>,
}

// -- Categories --------------------------------------------------------------

/// One category row of a sentiment-scoped breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRow {
    /// Category name.
    pub category: String,
    /// Reviews in the sentiment subset matching the category.
    pub review_count: usize,
    /// Share of the sentiment subset, percent, 1 decimal.
    pub percentage: f64,
    /// Up to 10 most-mentioned trigger keywords, formatted
    /// `"<keyword>(<count>)"`.
    pub top_keywords: Vec<String>,
}

/// Category breakdown of one sentiment bucket.
///
/// The schema is fixed: an empty sentiment subset yields zero rows, not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryReport {
    /// The sentiment bucket analyzed.
    pub sentiment: Sentiment,
    /// Size of the sentiment subset.
    pub total_reviews: usize,
    /// Category rows, review count descending, ties in catalog order.
    pub rows: Vec<CategoryRow>,
}

// -- Options -----------------------------------------------------------------

/// An option row with its rank.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankedOption {
    /// 1-based rank.
    pub rank: usize,
    /// Option label.
    pub label: String,
    /// Units sold.
    pub count: f64,
}

/// Top options by sale count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopOptionsReport {
    /// Ranked rows, count descending, ties keep input order.
    pub options: Vec<RankedOption>,
}

// -- Sales: summary ----------------------------------------------------------

/// Descriptive revenue statistics for one period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PeriodSummary {
    /// The period summarized.
    pub period: SalesPeriod,
    /// Sum of revenue.
    pub total: f64,
    /// Mean revenue.
    pub mean: f64,
    /// Median revenue.
    pub median: f64,
    /// Largest revenue.
    pub max: f64,
    /// Smallest revenue.
    pub min: f64,
    /// Products counted (total rows and non-positive revenue excluded).
    pub count: usize,
    /// 90th percentile of revenue.
    pub p90: f64,
}

// -- Sales: rankings ---------------------------------------------------------

/// A product in a period revenue ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankedProduct {
    /// 1-based rank.
    pub rank: usize,
    /// Product name.
    pub product_name: String,
    /// Revenue for the ranked period.
    pub revenue: f64,
    /// Base price, when the source carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    /// Sale count, when the source carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_count: Option<f64>,
}

/// A product ranked by revenue-to-price ratio.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PriceEfficiencyEntry {
    /// Product name.
    pub product_name: String,
    /// Revenue for the period.
    pub revenue: f64,
    /// Base price.
    pub base_price: f64,
    /// `revenue / base_price`.
    pub efficiency: f64,
}

// -- Sales: price segmentation -----------------------------------------------

/// One quartile-derived price bucket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PriceSegment {
    /// Human-readable bucket label with its boundaries.
    pub label: String,
    /// Inclusive lower price bound.
    pub lower: f64,
    /// Exclusive upper price bound; `None` for the open top bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    /// Products in the bucket.
    pub product_count: usize,
    /// Mean revenue over bucket rows that have revenue data.
    pub mean_revenue: f64,
    /// Total revenue over bucket rows that have revenue data.
    pub total_revenue: f64,
    /// Bucket rows that have revenue data.
    pub revenue_rows: usize,
}

// -- Sales: review correlation -----------------------------------------------

/// Aggregates for one fixed review-score bucket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBucket {
    /// Bucket label (e.g. `"4.0-4.5"`).
    pub label: String,
    /// Products in the bucket.
    pub product_count: usize,
    /// Mean revenue in the bucket.
    pub mean_revenue: f64,
    /// Mean review count in the bucket, when review counts exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_review_count: Option<f64>,
}

/// Pearson correlation of review score vs revenue, plus the fixed
/// score-bucket aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewSalesCorrelation {
    /// Pearson correlation coefficient.
    pub coefficient: f64,
    /// Paired rows the coefficient was computed over.
    pub sample_size: usize,
    /// Fixed score buckets: `<3.0`, `3.0-4.0`, `4.0-4.5`, `4.5-5.0`.
    pub buckets: Vec<ScoreBucket>,
}

// -- Sales: insights ---------------------------------------------------------

/// A product ranked by revenue per review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewEfficiencyEntry {
    /// Product name.
    pub product_name: String,
    /// Revenue for the period.
    pub revenue: f64,
    /// Number of reviews.
    pub review_count: f64,
    /// `revenue / review_count`.
    pub revenue_per_review: f64,
}

/// A product surfaced by a score/revenue filter (hidden gems,
/// underperforming).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoredProduct {
    /// Product name.
    pub product_name: String,
    /// Review score.
    pub review_score: f64,
    /// Revenue for the period.
    pub revenue: f64,
}

/// A high-revenue, low-review-count product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewNeededEntry {
    /// Product name.
    pub product_name: String,
    /// Revenue for the period.
    pub revenue: f64,
    /// Number of reviews.
    pub review_count: f64,
    /// `revenue / (review_count + 1)` — the ranking key.
    pub potential: f64,
}

/// A cheap, well-reviewed product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValuePick {
    /// Product name.
    pub product_name: String,
    /// Base price.
    pub base_price: f64,
    /// Review score.
    pub review_score: f64,
    /// `(1 - normalized_price) * review_score`.
    pub value_score: f64,
}

/// The five review/sales cross-insights for one period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SalesInsightsReport {
    /// Top products by revenue per review.
    pub review_efficiency: Vec<ReviewEfficiencyEntry>,
    /// High score, below-median revenue.
    pub hidden_gems: Vec<ScoredProduct>,
    /// Good score, revenue under the 75th percentile.
    pub underperforming: Vec<ScoredProduct>,
    /// High revenue, few reviews.
    pub review_needed: Vec<ReviewNeededEntry>,
    /// Low price, high score.
    pub value_picks: Vec<ValuePick>,
}
