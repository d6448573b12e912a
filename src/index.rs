//! Symbol index.
//!
//! [`SymbolIndex`] wires the pieces together: every corpus entry is keyed by
//! [`derive_key`] and inserted into a prefix trie, and prefix hits are turned
//! into [`Suggestion`] records carrying a label, a detail line and the import
//! directive to apply when the suggestion is accepted.
//!
//! An index is built once and never mutated afterwards. Queries take `&self`,
//! so one index can serve any number of readers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::index::IndexConfig;
use crate::config::SymdexConfig;
use crate::corpus::load_corpus;
use crate::data_structures::{ListPayloads, PayloadMode, PrefixTrie, SetPayloads};
use crate::error::SymdexResult;
use crate::extract::{derive_key, extract_suffix, ImportFormatter};
use crate::trigger::TriggerPolicy;

/// A completion suggestion handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display and insertion text: the symbol name after the last `?`
    pub label: String,

    /// Secondary text, e.g. `[smglom/sets]{mod?set}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Import directive the caller should add to the document on acceptance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_accept: Option<String>,
}

/// The trie under the payload policy chosen at build time.
#[derive(Debug, Clone)]
enum Payloads {
    Set(PrefixTrie<SetPayloads>),
    List(PrefixTrie<ListPayloads>),
}

/// Immutable prefix index over a corpus of module references.
#[derive(Debug, Clone)]
pub struct SymbolIndex {
    trie: Payloads,
    formatter: ImportFormatter,
    max_results: usize,
}

impl SymbolIndex {
    /// Builds an index from corpus entries, in corpus order.
    ///
    /// # Arguments
    ///
    /// * `corpus` - Module reference strings
    /// * `config` - Payload policy and result limit
    /// * `formatter` - Import directive formatter used for suggestions
    pub fn build<I, S>(corpus: I, config: &IndexConfig, formatter: ImportFormatter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = corpus
            .into_iter()
            .map(|entry| (derive_key(entry.as_ref()).to_string(), entry.as_ref().to_string()));

        let trie = match config.payload_mode {
            PayloadMode::Set => Payloads::Set(entries.collect()),
            PayloadMode::List => Payloads::List(entries.collect()),
        };

        let index = Self {
            trie,
            formatter,
            max_results: config.max_results,
        };
        info!(
            entries = index.len(),
            nodes = index.node_count(),
            mode = ?config.payload_mode,
            "Symbol index built"
        );
        index
    }

    /// Loads the configured corpus and builds an index from it.
    ///
    /// A corpus that cannot be loaded is an error; an empty corpus yields an
    /// empty index.
    pub fn from_config(config: &SymdexConfig) -> SymdexResult<Self> {
        let corpus = load_corpus(&config.corpus.path)?;
        Ok(Self::build(
            corpus,
            &config.index,
            ImportFormatter::new(&config.import),
        ))
    }

    /// Returns the full module references whose key starts with `prefix`.
    pub fn search_prefix(&self, prefix: &str) -> Vec<Arc<str>> {
        match &self.trie {
            Payloads::Set(trie) => trie.search_prefix(prefix),
            Payloads::List(trie) => trie.search_prefix(prefix),
        }
    }

    /// Returns suggestions for every entry whose key starts with `prefix`.
    ///
    /// The list is cut to `max_results` entries when a limit is configured.
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        let hits = self.search_prefix(prefix);
        debug!(prefix, hits = hits.len(), "Prefix lookup");

        let limit = match self.max_results {
            0 => usize::MAX,
            n => n,
        };
        hits.iter()
            .take(limit)
            .map(|identifier| self.suggestion(identifier))
            .collect()
    }

    /// Applies `trigger` to the text before the cursor and, if it fires,
    /// returns the suggestions for the extracted prefix.
    pub fn complete(&self, line_prefix: &str, trigger: &TriggerPolicy) -> Option<Vec<Suggestion>> {
        let prefix = trigger.prefix_at_cursor(line_prefix)?;
        Some(self.suggest(prefix))
    }

    /// Builds the suggestion record for one module reference.
    pub fn suggestion(&self, identifier: &str) -> Suggestion {
        Suggestion {
            label: extract_suffix(identifier).to_string(),
            detail: self.formatter.detail(identifier),
            on_accept: self.formatter.import_statement(identifier),
        }
    }

    /// Number of indexed corpus entries.
    pub fn len(&self) -> usize {
        match &self.trie {
            Payloads::Set(trie) => trie.len(),
            Payloads::List(trie) => trie.len(),
        }
    }

    /// Checks if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trie nodes backing the index.
    pub fn node_count(&self) -> usize {
        match &self.trie {
            Payloads::Set(trie) => trie.node_count(),
            Payloads::List(trie) => trie.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 3] = [
        "http://mathhub.info/x/mod?sym1",
        "http://mathhub.info/x/mod?sym2",
        "http://mathhub.info/y/mod?sym1other",
    ];

    fn list_index() -> SymbolIndex {
        SymbolIndex::build(CORPUS, &IndexConfig::default(), ImportFormatter::default())
    }

    #[test]
    fn test_shared_prefix_lookup() {
        let index = list_index();
        let hits = index.search_prefix("sym1");
        assert_eq!(
            hits,
            vec![Arc::from(CORPUS[0]), Arc::from(CORPUS[2])]
        );
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_suggest_labels() {
        let index = list_index();
        let labels: Vec<String> = index.suggest("sym").into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["sym1", "sym2", "sym1other"]);
    }

    #[test]
    fn test_suggestion_fields() {
        let index = list_index();
        let suggestion = index.suggestion("http://mathhub.info/foo/bar/mod?a?b");
        assert_eq!(
            suggestion,
            Suggestion {
                label: "b".to_string(),
                detail: Some("[foo/bar]{mod?a}".to_string()),
                on_accept: Some("\\importmodule[foo/bar]{mod?a}".to_string()),
            }
        );

        // One separator only: no import directive can be derived
        let suggestion = index.suggestion(CORPUS[0]);
        assert_eq!(suggestion.label, "sym1");
        assert_eq!(suggestion.detail, None);
        assert_eq!(suggestion.on_accept, None);
    }

    #[test]
    fn test_unknown_prefix_is_empty() {
        let index = list_index();
        assert!(index.suggest("zzz").is_empty());
    }

    #[test]
    fn test_max_results() {
        let config = IndexConfig {
            max_results: 2,
            ..IndexConfig::default()
        };
        let index = SymbolIndex::build(CORPUS, &config, ImportFormatter::default());
        assert_eq!(index.suggest("").len(), 2);
        assert_eq!(index.search_prefix("").len(), 3);
    }

    #[test]
    fn test_set_mode_collapses_duplicate_entries() {
        let corpus = [CORPUS[0], CORPUS[0], CORPUS[1]];
        let set_config = IndexConfig {
            payload_mode: PayloadMode::Set,
            ..IndexConfig::default()
        };

        let set_index = SymbolIndex::build(corpus, &set_config, ImportFormatter::default());
        let list_index =
            SymbolIndex::build(corpus, &IndexConfig::default(), ImportFormatter::default());

        assert_eq!(set_index.search_prefix("sym").len(), 2);
        assert_eq!(list_index.search_prefix("sym").len(), 3);
    }

    #[test]
    fn test_complete_with_triggers() {
        let index = list_index();
        let command = TriggerPolicy::command("sr").unwrap();

        let labels = |s: Vec<Suggestion>| s.into_iter().map(|s| s.label).collect::<Vec<_>>();

        assert_eq!(
            index.complete(r"text \sr{sym1", &command).map(labels),
            Some(vec!["sym1".to_string(), "sym1other".to_string()])
        );
        assert_eq!(index.complete("text sym1", &command), None);
        assert_eq!(
            index.complete("text sym2", &TriggerPolicy::WordRun).map(labels),
            Some(vec!["sym2".to_string()])
        );
    }

    #[test]
    fn test_empty_corpus() {
        let index = SymbolIndex::build(
            Vec::<String>::new(),
            &IndexConfig::default(),
            ImportFormatter::default(),
        );
        assert!(index.is_empty());
        assert!(index.suggest("").is_empty());
    }
}
