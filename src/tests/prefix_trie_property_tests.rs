// Copyright (c) 2025 Symdex Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix trie and the symbol index.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use super::test_utils::{corpus_strategy, key_strategy};
use crate::config::index::IndexConfig;
use crate::data_structures::{ListPayloads, PayloadMode, PrefixTrie, SetPayloads};
use crate::extract::{derive_key, ImportFormatter};
use crate::index::SymbolIndex;

// Pairs whose payload encodes the key, so a payload tells which key it came from
fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(key_strategy(), 0..30).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), format!("{i}:{key}")))
            .collect()
    })
}

fn key_of(payload: &str) -> &str {
    payload.split_once(':').map(|(_, key)| key).unwrap_or("")
}

fn as_set(values: Vec<Arc<str>>) -> HashSet<Arc<str>> {
    values.into_iter().collect()
}

proptest! {
    // Property: every payload is found under every prefix of its key
    #[test]
    fn prop_prefix_containment(pairs in pairs_strategy()) {
        let trie: PrefixTrie<ListPayloads> = pairs.iter().cloned().collect();

        for (key, payload) in &pairs {
            let chars: Vec<char> = key.chars().collect();
            for end in 0..=chars.len() {
                let prefix: String = chars[..end].iter().collect();
                let hits = trie.search_prefix(&prefix);
                prop_assert!(hits.iter().any(|h| &**h == payload.as_str()));
            }
            prop_assert!(trie.contains_key(key));
        }
    }

    // Property: every returned payload has a key starting with the prefix
    #[test]
    fn prop_no_false_positives(pairs in pairs_strategy(), prefix in key_strategy()) {
        let trie: PrefixTrie<SetPayloads> = pairs.iter().cloned().collect();

        for hit in trie.search_prefix(&prefix) {
            prop_assert!(key_of(&hit).starts_with(prefix.as_str()));
        }
    }

    // Property: results equal a linear scan over the pairs
    #[test]
    fn prop_matches_linear_scan(pairs in pairs_strategy(), prefix in key_strategy()) {
        let trie: PrefixTrie<ListPayloads> = pairs.iter().cloned().collect();

        let expected: Vec<Arc<str>> = pairs
            .iter()
            .filter(|(key, _)| key.starts_with(prefix.as_str()))
            .map(|(_, payload)| Arc::from(payload.as_str()))
            .collect();
        prop_assert_eq!(trie.search_prefix(&prefix), expected);
    }

    // Property: extending a prefix never adds results
    #[test]
    fn prop_monotonic(pairs in pairs_strategy(), p1 in key_strategy(), ext in key_strategy()) {
        let trie: PrefixTrie<SetPayloads> = pairs.iter().cloned().collect();
        let p2 = format!("{p1}{ext}");

        let shorter = as_set(trie.search_prefix(&p1));
        let longer = as_set(trie.search_prefix(&p2));
        prop_assert!(longer.is_subset(&shorter));
    }

    // Property: the empty prefix returns every payload
    #[test]
    fn prop_empty_prefix_is_union(pairs in pairs_strategy()) {
        let trie: PrefixTrie<SetPayloads> = pairs.iter().cloned().collect();

        let all: HashSet<Arc<str>> = pairs
            .iter()
            .map(|(_, payload)| Arc::from(payload.as_str()))
            .collect();
        prop_assert_eq!(as_set(trie.search_prefix("")), all);
    }

    // Property: building twice from the same corpus answers every query identically
    #[test]
    fn prop_idempotent_construction(corpus in corpus_strategy(), prefix in key_strategy()) {
        let config = IndexConfig { payload_mode: PayloadMode::List, max_results: 0 };
        let first = SymbolIndex::build(&corpus, &config, ImportFormatter::default());
        let second = SymbolIndex::build(&corpus, &config, ImportFormatter::default());

        prop_assert_eq!(first.search_prefix(&prefix), second.search_prefix(&prefix));
        prop_assert_eq!(first.suggest(&prefix), second.suggest(&prefix));
    }

    // Property: index hits are exactly the corpus entries whose derived key has the prefix
    #[test]
    fn prop_index_hits_match_derived_keys(corpus in corpus_strategy(), prefix in key_strategy()) {
        let index = SymbolIndex::build(&corpus, &IndexConfig::default(), ImportFormatter::default());

        let expected: Vec<Arc<str>> = corpus
            .iter()
            .filter(|entry| derive_key(entry).starts_with(prefix.as_str()))
            .map(|entry| Arc::from(entry.as_str()))
            .collect();
        prop_assert_eq!(index.search_prefix(&prefix), expected);
    }
}
