//! Rule-based sentiment classification.
//!
//! Counts positive/negative keyword hits in the morpheme stream and
//! thresholds the normalized difference. Deterministic by construction:
//! fixed keyword lists, fixed epsilon, fixed thresholds.

use crate::dictionaries::sentiment_lexicon::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use crate::records::{ReviewRecord, ScoredReview, Sentiment};
use crate::text::MorphTokenizer;

use super::reports::{SentimentCount, SentimentReport};

/// Keeps the score denominator positive when no keyword matches.
const EPSILON: f64 = 0.001;

/// Scores above this are positive.
const POSITIVE_THRESHOLD: f64 = 0.3;

/// Scores below this are negative.
const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Classify a continuous score into a bucket.
pub fn classify(score: f64) -> Sentiment {
    if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Score one text in [-1, 1]. Empty or unscoreable text scores 0.
///
/// `score = (pos - neg) / (pos + neg + 0.001)`, where a hit is a run of
/// consecutive morphemes whose concatenation equals a keyword. Keywords
/// that are single morphemes under the dictionary reduce to plain
/// whole-morpheme matches.
pub fn score_text(tokenizer: &MorphTokenizer, text: &str) -> f64 {
    let morphemes = tokenizer.morphemes(text);
    if morphemes.is_empty() {
        return 0.0;
    }

    let positive: usize = POSITIVE_KEYWORDS
        .iter()
        .map(|kw| count_keyword_hits(&morphemes, kw))
        .sum();
    let negative: usize = NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| count_keyword_hits(&morphemes, kw))
        .sum();

    (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + EPSILON)
}

/// Count keyword occurrences as boundary-aligned morpheme runs.
fn count_keyword_hits(morphemes: &[String], keyword: &str) -> usize {
    let mut hits = 0;
    for start in 0..morphemes.len() {
        let mut len = 0;
        for morpheme in &morphemes[start..] {
            len += morpheme.len();
            if len >= keyword.len() {
                if len == keyword.len() && run_equals(morphemes, start, keyword) {
                    hits += 1;
                }
                break;
            }
        }
    }
    hits
}

fn run_equals(morphemes: &[String], start: usize, keyword: &str) -> bool {
    let mut rest = keyword;
    for morpheme in &morphemes[start..] {
        match rest.strip_prefix(morpheme.as_str()) {
            Some(r) => rest = r,
            None => return false,
        }
        if rest.is_empty() {
            return true;
        }
    }
    false
}

/// Classify every review and tally per-bucket counts.
///
/// Every record receives exactly one label; the count table lists
/// buckets in order of first appearance while tallying, which is
/// deterministic for identical input.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn analyze_sentiment(reviews: &[ReviewRecord], tokenizer: &MorphTokenizer) -> SentimentReport {
    let scored: Vec<ScoredReview> = reviews
        .iter()
        .map(|r| {
            let score = r
                .text
                .as_deref()
                .map_or(0.0, |t| score_text(tokenizer, t));
            ScoredReview {
                text: r.text.clone(),
                sentiment_score: score,
                sentiment: classify(score),
            }
        })
        .collect();

    let mut counts: Vec<SentimentCount> = Vec::new();
    for review in &scored {
        match counts.iter_mut().find(|c| c.sentiment == review.sentiment) {
            Some(entry) => entry.reviews += 1,
            None => counts.push(SentimentCount {
                sentiment: review.sentiment,
                reviews: 1,
            }),
        }
    }

    SentimentReport {
        reviews: scored,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static TOKENIZER: LazyLock<MorphTokenizer> =
        LazyLock::new(|| MorphTokenizer::new().expect("ko-dic dictionary loads"));

    #[test]
    fn classify_thresholds() {
        assert_eq!(classify(0.5), Sentiment::Positive);
        assert_eq!(classify(0.3), Sentiment::Neutral);
        assert_eq!(classify(0.0), Sentiment::Neutral);
        assert_eq!(classify(-0.3), Sentiment::Neutral);
        assert_eq!(classify(-0.5), Sentiment::Negative);
    }

    #[test]
    fn no_keywords_scores_zero() {
        let score = score_text(&TOKENIZER, "그냥 보통이에요");
        assert_eq!(score, 0.0);
        assert_eq!(classify(score), Sentiment::Neutral);
    }

    #[test]
    fn single_positive_hit_is_positive() {
        // One positive keyword, zero negative: 1 / 1.001.
        let score = score_text(&TOKENIZER, "좋아요");
        assert!((score - 1.0 / 1.001).abs() < 1e-9);
        assert_eq!(classify(score), Sentiment::Positive);
    }

    #[test]
    fn single_negative_hit_is_negative() {
        let score = score_text(&TOKENIZER, "별로예요");
        assert!(score < NEGATIVE_THRESHOLD);
        assert_eq!(classify(score), Sentiment::Negative);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        for text in ["최고 최고 추천", "최악 실망 불만", "만족 실망", ""] {
            let score = score_text(&TOKENIZER, text);
            assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn deterministic_scores() {
        let text = "배송이 빨라요 좋아요";
        assert_eq!(score_text(&TOKENIZER, text), score_text(&TOKENIZER, text));
    }

    #[test]
    fn keyword_run_matching() {
        let morphemes: Vec<String> = ["좋", "아요", "배송"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(count_keyword_hits(&morphemes, "좋아요"), 1);
        assert_eq!(count_keyword_hits(&morphemes, "배송"), 1);
        assert_eq!(count_keyword_hits(&morphemes, "만족"), 0);
    }

    #[test]
    fn missing_text_is_neutral() {
        let rows = vec![ReviewRecord { text: None }];
        let report = analyze_sentiment(&rows, &TOKENIZER);
        assert_eq!(report.reviews[0].sentiment_score, 0.0);
        assert_eq!(report.reviews[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn three_way_split_counts() {
        let rows = vec![
            ReviewRecord::new("배송이 빨라요 좋아요"),
            ReviewRecord::new("맛없어요 별로예요"),
            ReviewRecord::new("그냥 보통이에요"),
        ];
        let report = analyze_sentiment(&rows, &TOKENIZER);
        assert_eq!(report.reviews.len(), 3);
        let find = |s: Sentiment| {
            report
                .counts
                .iter()
                .find(|c| c.sentiment == s)
                .map(|c| c.reviews)
        };
        assert_eq!(find(Sentiment::Positive), Some(1));
        assert_eq!(find(Sentiment::Negative), Some(1));
        assert_eq!(find(Sentiment::Neutral), Some(1));
    }

    #[test]
    fn count_order_follows_first_appearance() {
        let rows = vec![
            ReviewRecord::new("그냥 보통이에요"),
            ReviewRecord::new("좋아요"),
        ];
        let report = analyze_sentiment(&rows, &TOKENIZER);
        assert_eq!(report.counts[0].sentiment, Sentiment::Neutral);
        assert_eq!(report.counts[1].sentiment, Sentiment::Positive);
    }
}
