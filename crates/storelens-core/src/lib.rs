//! Core analytics library for storelens.
//!
//! Pure data-transformation routines over canonical tabular records:
//! keyword frequency, rule-based sentiment classification, category
//! tagging, option ranking, and sales-performance metrics. Ingestion
//! and presentation live in the `storelens` CLI crate; this crate never
//! touches files or the network.
//!
//! # Modules
//!
//! - [`analysis`] - The analytics themselves
//! - [`config`] - Configuration loading and management
//! - [`dictionaries`] - Built-in keyword data
//! - [`error`] - Error types and result aliases
//! - [`records`] - Canonical record types
//! - [`stopwords`] - Stopword set management
//! - [`text`] - Normalization and morphological tokenization
//!
//! # Quick Start
//!
//! ```no_run
//! use storelens_core::analysis::sentiment::analyze_sentiment;
//! use storelens_core::records::ReviewRecord;
//! use storelens_core::text::MorphTokenizer;
//!
//! let tokenizer = MorphTokenizer::new().expect("dictionary loads");
//! let reviews = vec![ReviewRecord::new("배송이 빨라요 좋아요")];
//! let report = analyze_sentiment(&reviews, &tokenizer);
//! println!("{:?}", report.counts);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod records;
pub mod stopwords;
pub mod text;

pub use analysis::categories::{CategoryCatalog, MatchStrategy};
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use records::{
    OptionRecord, ReviewRecord, SalesPeriod, SalesRecord, SalesTable, ScoredReview, Sentiment,
};
pub use stopwords::StopwordSet;
pub use text::MorphTokenizer;
