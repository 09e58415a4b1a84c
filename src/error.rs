//! Error types for fitting, querying and loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors raised by the recommender.
///
/// Data-quality issues inside the algorithm (empty documents, unknown query
/// terms, zero-norm vectors) are not errors; they resolve to empty results or
/// zero scores.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Fit was attempted on zero records.
    #[error("cannot fit a model on an empty corpus")]
    EmptyCorpus,

    /// A lookup named a record id that is not in the fitted corpus.
    #[error("unknown record id: {0}")]
    UnknownId(String),

    /// The corpus file header lacks a configured column.
    #[error("corpus is missing column '{0}'")]
    MissingColumn(String),

    /// Failed to read or parse the corpus CSV.
    #[error("failed to read corpus: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure outside of config reading (corpus file, terminal).
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] de::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = RecommendError> = std::result::Result<T, E>;
