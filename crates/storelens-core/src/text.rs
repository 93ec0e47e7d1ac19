//! Text normalization and morphological tokenization.
//!
//! Normalization is pure string surgery. Tokenization wraps a Korean
//! morphological dictionary (ko-dic) because review text has no word
//! delimiters at the morpheme level — naive whitespace splitting would
//! glue particles onto every noun. Dictionary load failure is the one
//! fatal error in this crate; per-call failures degrade to an empty
//! stream.

use std::sync::LazyLock;

use lindera::dictionary::{DictionaryKind, load_dictionary_from_kind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;
use regex::Regex;

use crate::error::{AnalysisError, AnalysisResult};
use crate::stopwords::StopwordSet;

/// Anything that is not a word character or whitespace.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// ASCII digits (other scripts' digits count as word characters and
/// survive, same as the upstream exports expect).
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex"));

/// Whitespace runs.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw review text for tokenization.
///
/// Replaces punctuation and ASCII digits with spaces, collapses
/// whitespace runs, and trims. Idempotent; never fails. Callers hold
/// `Option<String>` records — `None` simply never reaches here.
pub fn normalize(text: &str) -> String {
    let no_punct = NON_WORD.replace_all(text, " ");
    let no_digits = DIGITS.replace_all(&no_punct, " ");
    let collapsed = WHITESPACE.replace_all(&no_digits, " ");
    collapsed.trim().to_string()
}

/// Korean morphological tokenizer backed by the ko-dic dictionary.
///
/// Construct once at startup and share; the dictionary load is the
/// expensive part.
pub struct MorphTokenizer {
    inner: Tokenizer,
}

impl std::fmt::Debug for MorphTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphTokenizer").finish_non_exhaustive()
    }
}

impl MorphTokenizer {
    /// Load the ko-dic dictionary and build a tokenizer.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::TokenizerInit`] when the dictionary cannot be
    /// loaded. This is fatal at startup, by contract — analysis calls
    /// themselves never fail.
    pub fn new() -> AnalysisResult<Self> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::KoDic)
            .map_err(|e| AnalysisError::TokenizerInit(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            inner: Tokenizer::new(segmenter),
        })
    }

    /// Full morpheme stream of the normalized text, in order.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn morphemes(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        match self.inner.tokenize(&normalized) {
            Ok(tokens) => tokens
                .iter()
                .map(|t| t.text.to_string())
                .filter(|t| !t.trim().is_empty())
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "morpheme segmentation failed, yielding no tokens");
                Vec::new()
            }
        }
    }

    /// Noun morphemes (POS `NN*`) of the normalized text, in order,
    /// duplicates retained.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn nouns(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        match self.inner.tokenize(&normalized) {
            Ok(mut tokens) => tokens
                .iter_mut()
                .filter_map(|t| {
                    let pos = t.details().first().copied().unwrap_or("UNK").to_string();
                    if pos.starts_with("NN") {
                        Some(t.text.to_string())
                    } else {
                        None
                    }
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "noun extraction failed, yielding no tokens");
                Vec::new()
            }
        }
    }

    /// Nouns minus stopwords minus single-character tokens.
    ///
    /// Every returned token has character length >= 2 and is not in
    /// `stopwords`; order of occurrence, duplicates retained for
    /// frequency counting.
    pub fn content_nouns(&self, text: &str, stopwords: &StopwordSet) -> Vec<String> {
        self.nouns(text)
            .into_iter()
            .filter(|n| n.chars().count() > 1 && !stopwords.contains(n))
            .collect()
    }
}
