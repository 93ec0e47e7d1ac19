//! Stopword management.
//!
//! The set is an explicit value handed to every tokenization call rather
//! than process-global state, so concurrent callers (one set per
//! session) cannot observe each other's edits.

use serde::{Deserialize, Serialize};

use crate::dictionaries::stopwords::DEFAULT_STOPWORDS;

/// An ordered, duplicate-free set of stopwords.
///
/// Insertion order is preserved so listings are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StopwordSet {
    words: Vec<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl StopwordSet {
    /// The default set.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set (useful for tests and raw frequency counts).
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Add one or more words. Multi-word input is split on whitespace;
    /// blanks and words already present are ignored.
    pub fn add(&mut self, input: &str) {
        for word in input.split_whitespace() {
            if !self.contains(word) {
                self.words.push(word.to_string());
            }
        }
    }

    /// Remove a word if present.
    pub fn remove(&mut self, word: &str) {
        self.words.retain(|w| w != word);
    }

    /// Restore the default list.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `word` is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_carries_builtins() {
        let set = StopwordSet::new();
        assert!(set.contains("하다"));
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn add_splits_and_dedups() {
        let mut set = StopwordSet::empty();
        set.add("배송 가격 배송");
        assert_eq!(set.len(), 2);
        assert!(set.contains("배송"));
        assert!(set.contains("가격"));
    }

    #[test]
    fn add_ignores_existing() {
        let mut set = StopwordSet::new();
        let before = set.len();
        set.add("하다");
        assert_eq!(set.len(), before);
    }

    #[test]
    fn remove_then_reset() {
        let mut set = StopwordSet::new();
        set.remove("하다");
        assert!(!set.contains("하다"));
        set.reset();
        assert!(set.contains("하다"));
    }

    #[test]
    fn insertion_order_preserved() {
        let mut set = StopwordSet::empty();
        set.add("나중");
        set.add("먼저");
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, vec!["나중", "먼저"]);
    }
}
