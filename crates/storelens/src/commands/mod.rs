//! Command implementations.

use anyhow::Context;
use storelens_core::text::MorphTokenizer;

pub mod categories;
pub mod info;
pub mod keywords;
pub mod options;
pub mod sales;
pub mod sentiment;

/// Build the shared morphological tokenizer.
///
/// Dictionary load failure is the one fatal startup error of the
/// analytics core; surface it with context instead of per-call.
pub fn tokenizer() -> anyhow::Result<MorphTokenizer> {
    MorphTokenizer::new().context("failed to initialize the Korean morphological tokenizer")
}
