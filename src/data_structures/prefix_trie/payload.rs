// Copyright (c) 2025 Symdex Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Payload containers for prefix trie nodes.
//!
//! Every node keeps the payloads of all keys whose insertion path visits it.
//! How those payloads are accumulated is a policy injected into the trie as a
//! type parameter: [`SetPayloads`] collapses duplicates, [`ListPayloads`]
//! keeps every insertion in order.

use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Accumulation policy for the payloads attached to a trie node.
pub trait PayloadStore: Default + Debug + Clone + Send + Sync {
    /// Adds a payload to this container.
    fn add(&mut self, payload: &Arc<str>);

    /// Returns the stored payloads.
    ///
    /// List containers return them in insertion order; set containers make no
    /// ordering promise.
    fn to_vec(&self) -> Vec<Arc<str>>;

    /// Number of stored payloads.
    fn len(&self) -> usize;

    /// Whether the container holds no payloads.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Set semantics: a payload inserted twice is stored once.
#[derive(Debug, Clone, Default)]
pub struct SetPayloads {
    items: FnvHashSet<Arc<str>>,
}

impl PayloadStore for SetPayloads {
    fn add(&mut self, payload: &Arc<str>) {
        if !self.items.contains(payload) {
            self.items.insert(Arc::clone(payload));
        }
    }

    fn to_vec(&self) -> Vec<Arc<str>> {
        self.items.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// List semantics: duplicates are kept and the first inserted payload comes first.
#[derive(Debug, Clone, Default)]
pub struct ListPayloads {
    items: Vec<Arc<str>>,
}

impl PayloadStore for ListPayloads {
    fn add(&mut self, payload: &Arc<str>) {
        self.items.push(Arc::clone(payload));
    }

    fn to_vec(&self) -> Vec<Arc<str>> {
        self.items.clone()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Runtime selector for the payload policy, as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadMode {
    /// Use [`SetPayloads`].
    Set,
    /// Use [`ListPayloads`].
    #[default]
    List,
}
