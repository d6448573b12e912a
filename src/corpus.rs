//! Corpus loading.
//!
//! The corpus is a JSON array of module reference strings. Loading either
//! yields the full list, possibly empty, or a [`CorpusError`] describing why
//! no list could be produced.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::corpus::CorpusError;

/// Parses a corpus from its JSON text.
pub fn parse_corpus(json: &str) -> Result<Vec<String>, CorpusError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the corpus file at `path`.
///
/// A missing file is reported as [`CorpusError::NotFound`] so callers can
/// tell it apart from a file that exists but is unreadable or malformed.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading corpus");

    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CorpusError::NotFound(path.to_path_buf()),
        _ => CorpusError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let corpus = parse_corpus(&json)?;
    info!(path = %path.display(), entries = corpus.len(), "Corpus loaded");
    Ok(corpus)
}
