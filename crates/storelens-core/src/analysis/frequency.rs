//! Keyword frequency analysis.

use std::collections::HashMap;

use crate::records::ReviewRecord;
use crate::stopwords::StopwordSet;
use crate::text::MorphTokenizer;

use super::reports::{KeywordCount, KeywordFrequencyReport};

/// How many keywords the top ranking keeps.
pub const TOP_KEYWORDS: usize = 20;

/// Build the keyword frequency table over a review collection.
///
/// All present texts are joined with single spaces and tokenized in one
/// pass, so counts reflect the whole corpus. The full table is in
/// first-occurrence order; the top ranking sorts by count descending
/// with ties kept in first-occurrence order, which makes the result
/// reproducible for identical input.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn analyze_keyword_frequency(
    reviews: &[ReviewRecord],
    tokenizer: &MorphTokenizer,
    stopwords: &StopwordSet,
) -> KeywordFrequencyReport {
    let joined = reviews
        .iter()
        .filter_map(|r| r.text.as_deref())
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = tokenizer.content_nouns(&joined, stopwords);
    let total_tokens = tokens.len();

    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        if let Some(&i) = index.get(&token) {
            counts[i].count += 1;
        } else {
            index.insert(token.clone(), counts.len());
            counts.push(KeywordCount {
                keyword: token,
                count: 1,
            });
        }
    }

    // Stable sort: equal counts keep first-occurrence order.
    let mut top = counts.clone();
    top.sort_by(|a, b| b.count.cmp(&a.count));
    top.truncate(TOP_KEYWORDS);

    KeywordFrequencyReport {
        counts,
        top,
        total_tokens,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static TOKENIZER: LazyLock<MorphTokenizer> =
        LazyLock::new(|| MorphTokenizer::new().expect("ko-dic dictionary loads"));

    fn reviews(texts: &[&str]) -> Vec<ReviewRecord> {
        texts.iter().map(|t| ReviewRecord::new(*t)).collect()
    }

    #[test]
    fn empty_collection_yields_empty_report() {
        let report = analyze_keyword_frequency(&[], &TOKENIZER, &StopwordSet::new());
        assert!(report.counts.is_empty());
        assert!(report.top.is_empty());
        assert_eq!(report.total_tokens, 0);
    }

    #[test]
    fn missing_text_contributes_nothing() {
        let rows = vec![ReviewRecord { text: None }, ReviewRecord { text: None }];
        let report = analyze_keyword_frequency(&rows, &TOKENIZER, &StopwordSet::new());
        assert_eq!(report.total_tokens, 0);
    }

    #[test]
    fn repeated_keyword_counted_across_reviews() {
        let rows = reviews(&["배송이 빨라요", "배송 상태가 좋아요", "배송 만족"]);
        let report = analyze_keyword_frequency(&rows, &TOKENIZER, &StopwordSet::new());
        let delivery = report.counts.iter().find(|c| c.keyword == "배송");
        assert_eq!(delivery.map(|c| c.count), Some(3));
    }

    #[test]
    fn stopworded_keyword_excluded() {
        let rows = reviews(&["배송이 빨라요", "배송 만족"]);
        let mut stopwords = StopwordSet::new();
        stopwords.add("배송");
        let report = analyze_keyword_frequency(&rows, &TOKENIZER, &stopwords);
        assert!(!report.counts.iter().any(|c| c.keyword == "배송"));
    }

    #[test]
    fn top_is_deterministic_and_count_sorted() {
        let rows = reviews(&["가격 가격 배송", "가격 배송 품질"]);
        let a = analyze_keyword_frequency(&rows, &TOKENIZER, &StopwordSet::new());
        let b = analyze_keyword_frequency(&rows, &TOKENIZER, &StopwordSet::new());
        let a_top: Vec<&str> = a.top.iter().map(|c| c.keyword.as_str()).collect();
        let b_top: Vec<&str> = b.top.iter().map(|c| c.keyword.as_str()).collect();
        assert_eq!(a_top, b_top);
        for pair in a.top.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        // Equal counts rank by first occurrence: 배송 appears before 품질.
        let delivery = a_top.iter().position(|k| *k == "배송");
        let quality = a_top.iter().position(|k| *k == "품질");
        if let (Some(d), Some(q)) = (delivery, quality) {
            assert!(d < q);
        }
    }

    #[test]
    fn top_caps_at_twenty() {
        let many: Vec<String> = (0..30).map(|i| format!("상품명칭{i} 배송")).collect();
        let rows: Vec<ReviewRecord> = many.iter().map(|t| ReviewRecord::new(t.as_str())).collect();
        let report = analyze_keyword_frequency(&rows, &TOKENIZER, &StopwordSet::new());
        assert!(report.top.len() <= TOP_KEYWORDS);
    }
}
