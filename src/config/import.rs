//! Import directive configuration module.
//!
//! This module defines how module references are turned into import
//! directives offered alongside each suggestion.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Import directive configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// URL prefix stripped from a module reference to obtain the module path
    pub base_url: String,

    /// Path suffix stripped after the base URL
    pub module_suffix: String,

    /// Name of the directive command, without the leading backslash
    pub directive: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://mathhub.info/".to_string(),
            module_suffix: "/mod".to_string(),
            directive: "importmodule".to_string(),
        }
    }
}

impl Validate for ImportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "base_url must not be empty".to_string(),
            ));
        }

        if self.directive.is_empty() {
            return Err(ConfigError::ValidationError(
                "directive must not be empty".to_string(),
            ));
        }

        if !self.directive.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValueType {
                key: "import.directive".to_string(),
                expected: "ASCII letters".to_string(),
                actual: self.directive.clone(),
            });
        }

        Ok(())
    }
}
