//! Identifier extraction.
//!
//! Corpus entries are module references of the form
//! `<base-url><module-path>/mod?<module>?<symbol>`. This module derives the
//! trie key, the completion label and the import directive from such a
//! reference. Extraction never fails: inputs without enough `?` separators
//! produce empty strings or `None`.

use crate::config::import::ImportConfig;

/// Returns the indexing key: everything after the first `?`, or `""`.
///
/// ```
/// use symdex_lib::extract::derive_key;
///
/// assert_eq!(derive_key("http://x/mod?a?b"), "a?b");
/// assert_eq!(derive_key("no-separator"), "");
/// ```
pub fn derive_key(identifier: &str) -> &str {
    identifier
        .split_once('?')
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

/// Returns the completion label: everything after the last `?`, or `""`.
///
/// ```
/// use symdex_lib::extract::extract_suffix;
///
/// assert_eq!(extract_suffix("http://x/mod?a?b"), "b");
/// ```
pub fn extract_suffix(identifier: &str) -> &str {
    identifier
        .rsplit_once('?')
        .map(|(_, suffix)| suffix)
        .unwrap_or("")
}

/// Builds import directives from module references.
#[derive(Debug, Clone)]
pub struct ImportFormatter {
    base_url: String,
    module_suffix: String,
    directive: String,
}

impl ImportFormatter {
    /// Creates a formatter from the import configuration.
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            module_suffix: config.module_suffix.clone(),
            directive: config.directive.clone(),
        }
    }

    /// Formats the import directive for `identifier`.
    ///
    /// Returns `None` when the identifier has fewer than two `?` separators.
    /// The module path is the part before the first `?` with the base URL and
    /// then the module suffix removed (first occurrence of each); the module
    /// name is `mod?` followed by the second part.
    pub fn import_statement(&self, identifier: &str) -> Option<String> {
        let parts: Vec<&str> = identifier.split('?').collect();
        if parts.len() < 3 {
            return None;
        }

        let module_path = parts[0]
            .replacen(self.base_url.as_str(), "", 1)
            .replacen(self.module_suffix.as_str(), "", 1);
        let module_name = format!("mod?{}", parts[1]);

        Some(format!(
            "\\{}[{}]{{{}}}",
            self.directive, module_path, module_name
        ))
    }

    /// Secondary text for a suggestion: the import directive without its
    /// command name, e.g. `[foo/bar]{mod?a}`.
    pub fn detail(&self, identifier: &str) -> Option<String> {
        let statement = self.import_statement(identifier)?;
        let command = format!("\\{}", self.directive);
        Some(statement.replacen(command.as_str(), "", 1).trim().to_string())
    }
}

impl Default for ImportFormatter {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}
