//! Data structures for symdex.
//!
//! This module contains the index structures behind symbol completion.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Immutable after construction, shareable between readers without locks

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{ListPayloads, PayloadMode, PayloadStore, PrefixTrie, SetPayloads};
