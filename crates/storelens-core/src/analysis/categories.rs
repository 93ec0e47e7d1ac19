//! Sentiment-scoped category tagging.
//!
//! Re-scans classified reviews against a per-sentiment table of
//! category triggers and tallies membership, percentages, and the most
//! mentioned keywords. The trigger tables are data
//! ([`CategoryCatalog`]), not code, so domains can be retuned without a
//! redeploy.

use std::collections::BTreeSet;

use aho_corasick::AhoCorasick;
use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::categories::{NEGATIVE_CATEGORIES, NEUTRAL_CATEGORIES, POSITIVE_CATEGORIES};
use crate::error::{ConfigError, ConfigResult};
use crate::records::{ScoredReview, Sentiment};
use crate::text::normalize;

use super::reports::{CategoryReport, CategoryRow};

/// How many top keywords a category row lists.
const TOP_KEYWORDS_PER_CATEGORY: usize = 10;

/// How a trigger keyword is matched against review text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MatchStrategy {
    /// Case-insensitive substring match on the raw text. Deliberately
    /// over-matches inside compound words — the documented heuristic.
    #[default]
    Substring,
    /// Whole-token equality over the normalized, whitespace-split text.
    /// Stricter; misses conjugated forms.
    Token,
}

/// One category with its trigger keywords, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CategoryKeywords {
    /// Category name.
    pub name: String,
    /// Trigger substrings/tokens.
    pub keywords: Vec<String>,
}

/// The full sentiment -> category -> keywords table.
///
/// Serializable so deployments can swap in their own domain tuning via
/// a TOML/YAML/JSON file; `version` tracks the tuning revision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CategoryCatalog {
    /// Catalog revision, bumped when the tables change.
    pub version: u32,
    /// Categories scanned in positive reviews.
    pub positive: Vec<CategoryKeywords>,
    /// Categories scanned in neutral reviews.
    pub neutral: Vec<CategoryKeywords>,
    /// Categories scanned in negative reviews.
    pub negative: Vec<CategoryKeywords>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        fn table(raw: &[(&str, &[&str])]) -> Vec<CategoryKeywords> {
            raw.iter()
                .map(|(name, keywords)| CategoryKeywords {
                    name: (*name).to_string(),
                    keywords: keywords.iter().map(ToString::to_string).collect(),
                })
                .collect()
        }
        Self {
            version: 1,
            positive: table(POSITIVE_CATEGORIES),
            neutral: table(NEUTRAL_CATEGORIES),
            negative: table(NEGATIVE_CATEGORIES),
        }
    }
}

impl CategoryCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Categories for one sentiment bucket.
    pub fn categories_for(&self, sentiment: Sentiment) -> &[CategoryKeywords] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }

    /// Load a catalog from a TOML, YAML, or JSON file (by extension;
    /// unknown extensions are read as TOML).
    pub fn from_file(path: &Utf8Path) -> ConfigResult<Self> {
        let figment = match path.extension() {
            Some("yaml" | "yml") => Figment::from(Yaml::file_exact(path.as_str())),
            Some("json") => Figment::from(Json::file_exact(path.as_str())),
            _ => Figment::from(Toml::file_exact(path.as_str())),
        };
        figment.extract().map_err(|e| ConfigError::Catalog {
            path: Utf8PathBuf::from(path),
            reason: e.to_string(),
        })
    }
}

/// A compiled scanner for one category's keywords.
struct KeywordScan<'a> {
    keywords: &'a [String],
    automaton: Option<AhoCorasick>,
    /// Automaton pattern index -> catalog keyword index. Blank keywords
    /// are skipped at build time, so the two can diverge.
    pattern_map: Vec<usize>,
    strategy: MatchStrategy,
}

impl<'a> KeywordScan<'a> {
    fn new(keywords: &'a [String], strategy: MatchStrategy) -> Self {
        let mut pattern_map = Vec::new();
        let automaton = match strategy {
            MatchStrategy::Substring => {
                let patterns: Vec<&String> = keywords
                    .iter()
                    .enumerate()
                    .filter(|(_, k)| !k.is_empty())
                    .map(|(i, k)| {
                        pattern_map.push(i);
                        k
                    })
                    .collect();
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(patterns)
                    .ok()
            }
            MatchStrategy::Token => None,
        };
        Self {
            keywords,
            automaton,
            pattern_map,
            strategy,
        }
    }

    /// Indices of keywords present in `text`, ascending.
    fn matched_keywords(&self, text: &str) -> BTreeSet<usize> {
        match self.strategy {
            MatchStrategy::Substring => {
                let Some(ref ac) = self.automaton else {
                    return BTreeSet::new();
                };
                ac.find_overlapping_iter(text)
                    .map(|m| self.pattern_map[m.pattern().as_usize()])
                    .collect()
            }
            MatchStrategy::Token => {
                let normalized = normalize(text);
                let tokens: BTreeSet<&str> = normalized.split_whitespace().collect();
                self.keywords
                    .iter()
                    .enumerate()
                    .filter(|(_, kw)| tokens.contains(kw.as_str()))
                    .map(|(i, _)| i)
                    .collect()
            }
        }
    }
}

/// Break one sentiment bucket down by category.
///
/// Membership: a review belongs to a category when any trigger matches
/// its text. Per-keyword counts are recomputed across the FULL
/// sentiment subset (not the category subset) so the "most mentioned"
/// ranking reflects the whole bucket. An empty subset yields zero rows
/// with the fixed schema. Rows sort by review count descending; ties
/// keep catalog order (stable sort).
#[tracing::instrument(skip_all, fields(sentiment = %sentiment, reviews = reviews.len()))]
pub fn analyze_categories(
    reviews: &[ScoredReview],
    sentiment: Sentiment,
    catalog: &CategoryCatalog,
    strategy: MatchStrategy,
) -> CategoryReport {
    let subset: Vec<&ScoredReview> = reviews.iter().filter(|r| r.sentiment == sentiment).collect();
    let total = subset.len();
    if total == 0 {
        return CategoryReport {
            sentiment,
            total_reviews: 0,
            rows: Vec::new(),
        };
    }

    let mut rows: Vec<CategoryRow> = Vec::new();
    for category in catalog.categories_for(sentiment) {
        let scan = KeywordScan::new(&category.keywords, strategy);

        // One overlapping scan per review yields both membership and
        // which keywords appeared.
        let mut member_count = 0usize;
        let mut keyword_hits = vec![0usize; category.keywords.len()];
        for review in &subset {
            let Some(text) = review.text.as_deref() else {
                continue;
            };
            let matched = scan.matched_keywords(text);
            if matched.is_empty() {
                continue;
            }
            member_count += 1;
            for idx in matched {
                keyword_hits[idx] += 1;
            }
        }

        if member_count == 0 {
            continue;
        }

        // Stable sort: equal counts keep catalog keyword order.
        let mut mentioned: Vec<(usize, usize)> = keyword_hits
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .collect();
        mentioned.sort_by(|a, b| b.1.cmp(&a.1));
        let top_keywords: Vec<String> = mentioned
            .iter()
            .take(TOP_KEYWORDS_PER_CATEGORY)
            .map(|&(idx, count)| format!("{}({count})", category.keywords[idx]))
            .collect();

        rows.push(CategoryRow {
            category: category.name.clone(),
            review_count: member_count,
            percentage: round1(member_count as f64 / total as f64 * 100.0),
            top_keywords,
        });
    }

    rows.sort_by(|a, b| b.review_count.cmp(&a.review_count));

    CategoryReport {
        sentiment,
        total_reviews: total,
        rows,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
