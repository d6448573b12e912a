//! Corpus error module.
//!
//! This module defines the errors that can occur while loading the corpus of
//! module references. A failed load is always reported; it is never turned
//! into an empty corpus.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error when the corpus file does not exist.
    #[error("Corpus file not found: {0}")]
    NotFound(PathBuf),

    /// Error when the corpus file exists but cannot be read.
    #[error("Failed to read corpus file {path}: {source}")]
    Read {
        /// Path of the corpus file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the corpus is not a JSON array of strings.
    #[error("Failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}
