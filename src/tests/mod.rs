//! Test modules for symdex.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the prefix trie and symbol index
//! - Shared fixtures and proptest strategies

pub mod error_tests;
pub mod prefix_trie_property_tests;
