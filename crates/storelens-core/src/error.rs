//! Error types for storelens-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A category catalog file could not be read or parsed.
    #[error("invalid category catalog {path}: {reason}")]
    Catalog {
        /// Path of the catalog file that failed to load.
        path: camino::Utf8PathBuf,
        /// Why loading failed.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during analysis setup.
///
/// Analysis functions themselves never fail on degenerate data — missing
/// columns, empty filters, and unscoreable text all produce typed-empty
/// results. Only subsystem initialization is fallible.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The morphological tokenizer could not be initialized.
    #[error("tokenizer initialization failed: {0}")]
    TokenizerInit(String),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
