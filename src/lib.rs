//! Symdex Library
//!
//! Prefix completion for sTeX symbol references. A corpus of module
//! references such as `http://mathhub.info/smglom/sets/mod?set?emptyset` is
//! indexed by the part after the first `?`, and a partially typed symbol
//! name returns every reference sharing that prefix together with the import
//! directive needed to use it.
//!
//! # Architecture
//!
//! - [`extract`] derives keys, labels and import directives from references
//! - [`data_structures::PrefixTrie`] is the index, generic over its payload policy
//! - [`corpus`] loads the reference list from JSON
//! - [`trigger`] extracts the typed prefix from the text before the cursor
//! - [`index::SymbolIndex`] ties them together and produces suggestions
//!
//! Editor integration is left to the caller: it passes in text and receives
//! plain suggestion records back.

pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;
pub mod extract;
pub mod index;
pub mod trigger;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use index::{Suggestion, SymbolIndex};

/// Version information for symdex.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
