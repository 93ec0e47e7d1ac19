//! Default stopword list.
//!
//! Korean particles and light verbs that carry no topical signal. Users
//! extend or replace the list at runtime; see [`crate::stopwords`].

/// Words excluded from keyword extraction by default.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "이", "가", "은", "는", "을", "를", "에", "의", "과", "와", "에서", "로", "으로", "하다",
    "있다", "되다", "것",
];
