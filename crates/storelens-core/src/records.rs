//! Canonical record types the analytics core operates on.
//!
//! Ingestion (an external concern — the CLI's `ingest` module here) maps
//! source-specific column names onto these records exactly once, so the
//! core never branches on spreadsheet naming. See the period and
//! total-row vocabularies below for the fixed parts of that schema.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentiment bucket assigned to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Sentiment {
    /// Score above the positive threshold.
    Positive,
    /// Score between the thresholds (including unscoreable text).
    Neutral,
    /// Score below the negative threshold.
    Negative,
}

impl Sentiment {
    /// Returns the bucket as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One review row. `text` is `None` when the source cell was empty or
/// not a string; such rows still classify (as neutral, score 0).
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ReviewRecord {
    /// Free-form review text.
    pub text: Option<String>,
}

impl ReviewRecord {
    /// Build a record from any text-ish source value.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A review augmented with its sentiment classification.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ScoredReview {
    /// Original review text.
    pub text: Option<String>,
    /// Continuous score in [-1, 1].
    pub sentiment_score: f64,
    /// Assigned bucket.
    pub sentiment: Sentiment,
}

/// One product-option row.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct OptionRecord {
    /// Option label.
    pub label: String,
    /// Units sold (non-negative; sources sometimes export fractions).
    pub count: f64,
}

/// The six fixed revenue aggregation windows, in vocabulary order.
///
/// Period discovery and all period-keyed output preserve this order,
/// never the source column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SalesPeriod {
    /// Trailing 7 days.
    #[serde(rename = "7-day")]
    #[cfg_attr(feature = "clap", value(name = "7-day"))]
    SevenDays,
    /// Trailing month.
    #[serde(rename = "1-month")]
    #[cfg_attr(feature = "clap", value(name = "1-month"))]
    OneMonth,
    /// Trailing 3 months.
    #[serde(rename = "3-month")]
    #[cfg_attr(feature = "clap", value(name = "3-month"))]
    ThreeMonths,
    /// Trailing 6 months.
    #[serde(rename = "6-month")]
    #[cfg_attr(feature = "clap", value(name = "6-month"))]
    SixMonths,
    /// Trailing year.
    #[serde(rename = "1-year")]
    #[cfg_attr(feature = "clap", value(name = "1-year"))]
    OneYear,
    /// Trailing 2 years.
    #[serde(rename = "2-year")]
    #[cfg_attr(feature = "clap", value(name = "2-year"))]
    TwoYears,
}

impl SalesPeriod {
    /// All periods in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::SevenDays,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
    ];

    /// Canonical label used in CLI flags and JSON output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7-day",
            Self::OneMonth => "1-month",
            Self::ThreeMonths => "3-month",
            Self::SixMonths => "6-month",
            Self::OneYear => "1-year",
            Self::TwoYears => "2-year",
        }
    }

    /// Column stem as it appears in the source exports.
    pub const fn column_stem(&self) -> &'static str {
        match self {
            Self::SevenDays => "7일",
            Self::OneMonth => "1개월",
            Self::ThreeMonths => "3개월",
            Self::SixMonths => "6개월",
            Self::OneYear => "1년",
            Self::TwoYears => "2년",
        }
    }

    /// Full revenue column name in the source exports.
    pub fn revenue_column(&self) -> String {
        format!("{} 매출", self.column_stem())
    }
}

impl std::fmt::Display for SalesPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product row of the sales export.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct SalesRecord {
    /// Product name — the row identity (no surrogate key in the source).
    pub product_name: String,
    /// Parsed revenue cells, keyed by period. Absent key = empty or
    /// unparseable cell.
    #[serde(default)]
    pub revenue: BTreeMap<SalesPeriod, f64>,
    /// Base sale price.
    pub base_price: Option<f64>,
    /// Average review score, 0–5.
    pub review_score: Option<f64>,
    /// Number of reviews.
    pub review_count: Option<f64>,
    /// Number of sales, when the export carries one of the known
    /// sale-count columns.
    pub sale_count: Option<f64>,
}

impl SalesRecord {
    /// Revenue for a period, if the cell was present.
    pub fn revenue_for(&self, period: SalesPeriod) -> Option<f64> {
        self.revenue.get(&period).copied()
    }
}

/// A sales export: which period columns the source carried, plus rows.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct SalesTable {
    /// Period columns present in the source, vocabulary order.
    pub periods: Vec<SalesPeriod>,
    /// Product rows, source order (total rows included — every analysis
    /// excludes them itself).
    pub rows: Vec<SalesRecord>,
}

/// Name substrings that mark a synthetic grand-total row.
pub const TOTAL_ROW_MARKERS: &[&str] = &["total", "합계", "전체", "총계"];

/// Whether a product name denotes a synthetic total row.
///
/// Case-insensitive substring match against [`TOTAL_ROW_MARKERS`]. Total
/// rows must be excluded before any aggregate statistic; leaving one in
/// corrupts every downstream ranking and quantile.
pub fn is_total_row(product_name: &str) -> bool {
    let lower = product_name.to_lowercase();
    TOTAL_ROW_MARKERS.iter().any(|m| lower.contains(m))
}
