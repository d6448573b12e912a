//! Index configuration module.
//!
//! This module defines where the corpus is read from and how the prefix
//! index accumulates and returns its results.

use super::{ConfigResult, Validate};
use crate::data_structures::PayloadMode;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Corpus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Path to a JSON file holding an array of module reference strings
    pub path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("url.json"),
        }
    }
}

impl Validate for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("corpus.path".to_string()));
        }

        Ok(())
    }
}

/// Prefix index configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Payload accumulation policy (`set` or `list`)
    pub payload_mode: PayloadMode,

    /// Maximum number of suggestions returned per query (0 for unlimited)
    pub max_results: usize,
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every value of both fields is meaningful
        Ok(())
    }
}
