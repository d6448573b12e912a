// Copyright (c) 2025 Symdex Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Each node owns its children outright; the trie is a strict tree with no
//! back references, so dropping the root releases the whole graph.

use fnv::FnvHashMap;

use super::payload::PayloadStore;

/// A node in the prefix trie.
#[derive(Debug, Clone)]
pub struct TrieNode<S: PayloadStore> {
    /// Map of characters to child nodes
    pub children: FnvHashMap<char, TrieNode<S>>,

    /// Whether some inserted key ends exactly at this node
    pub is_end_of_word: bool,

    /// Payloads of every key whose insertion path visits this node
    pub payloads: S,
}

impl<S: PayloadStore> TrieNode<S> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_end_of_word: false,
            payloads: S::default(),
        }
    }
}

impl<S: PayloadStore> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}
