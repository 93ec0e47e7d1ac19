//! Built-in keyword data for review analytics.
//!
//! Provides the default stopword list, the sentiment lexicon, and the
//! per-sentiment category trigger tables.

pub mod categories;
pub mod sentiment_lexicon;
pub mod stopwords;
