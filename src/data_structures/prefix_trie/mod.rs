// Copyright (c) 2025 Symdex Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! A character trie that aggregates payloads along every insertion path, so a
//! prefix lookup is a single descent followed by reading one node's payloads.
//! The cost of a lookup depends on the prefix length and the result size,
//! never on the number of stored keys.
//!
//! The trie is built once and then only read. Reads take `&self` and the type
//! is `Send + Sync`, so a built trie can be shared between threads without
//! any locking.

mod node;
pub mod payload;

use std::sync::Arc;

use node::TrieNode;
pub use payload::{ListPayloads, PayloadMode, PayloadStore, SetPayloads};

/// Prefix trie storing `(key, payload)` pairs.
///
/// Each node carries the payloads of every key passing through it, the root
/// included. A node's payloads are therefore always a superset of any of its
/// descendants' payloads, and the root holds the union of everything inserted.
///
/// The payload policy `S` decides whether duplicates collapse
/// ([`SetPayloads`]) or are kept in insertion order ([`ListPayloads`]).
#[derive(Debug, Clone)]
pub struct PrefixTrie<S: PayloadStore = ListPayloads> {
    /// The root node of the trie
    root: TrieNode<S>,

    /// Number of insert calls
    key_count: usize,

    /// Number of nodes, root included
    node_count: usize,
}

impl<S: PayloadStore> PrefixTrie<S> {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            key_count: 0,
            node_count: 1,
        }
    }

    /// Inserts `key` and attaches `payload` to every node on its path.
    ///
    /// Missing nodes are created as the key is walked character by character.
    /// The node reached after the last character is marked as the end of a
    /// word. An empty key marks the root and attaches the payload there only.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `payload` - The value to associate with the key and all its prefixes.
    pub fn insert<K, V>(&mut self, key: K, payload: V)
    where
        K: AsRef<str>,
        V: Into<Arc<str>>,
    {
        let payload: Arc<str> = payload.into();
        let mut created = 0;

        let mut node = &mut self.root;
        node.payloads.add(&payload);
        for c in key.as_ref().chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
            node.payloads.add(&payload);
        }
        node.is_end_of_word = true;

        self.node_count += created;
        self.key_count += 1;
    }

    /// Returns every payload whose key starts with `prefix`.
    ///
    /// Payloads whose key equals `prefix` are included. An unknown prefix
    /// yields an empty vector; the empty prefix yields all payloads.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    pub fn search_prefix<P>(&self, prefix: P) -> Vec<Arc<str>>
    where
        P: AsRef<str>,
    {
        self.find_node(prefix.as_ref())
            .map(|node| node.payloads.to_vec())
            .unwrap_or_default()
    }

    /// Checks whether `key` itself was inserted, not merely a longer key
    /// starting with it.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.find_node(key.as_ref())
            .map(|node| node.is_end_of_word)
            .unwrap_or(false)
    }

    /// Number of keys inserted so far, duplicates counted.
    pub fn len(&self) -> usize {
        self.key_count
    }

    /// Checks if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode<S>> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<S: PayloadStore> Default for PrefixTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K, V> FromIterator<(K, V)> for PrefixTrie<S>
where
    S: PayloadStore,
    K: AsRef<str>,
    V: Into<Arc<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        for (key, payload) in iter {
            trie.insert(key, payload);
        }
        trie
    }
}
