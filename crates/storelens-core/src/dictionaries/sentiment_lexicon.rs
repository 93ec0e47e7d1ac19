//! Fixed positive/negative keyword lists for sentiment scoring.
//!
//! Deliberately small — the classifier is a deterministic keyword
//! heuristic, not a model. Matching is whole-morpheme (see
//! [`crate::analysis::sentiment`]).

/// Keywords counted as positive hits.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "좋다",
    "좋은",
    "좋아요",
    "만족",
    "최고",
    "추천",
    "맛있다",
    "편리하다",
    "빠르다",
    "친절하다",
];

/// Keywords counted as negative hits.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "나쁘다",
    "별로",
    "실망",
    "불만",
    "최악",
    "싫다",
    "아쉽다",
    "느리다",
    "불친절하다",
];
