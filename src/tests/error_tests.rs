//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::corpus::CorpusError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, SymdexError,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = SymdexError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep the inner message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let symdex_error = SymdexError::Io(io_error);
    assert!(format!("{symdex_error}").contains("file not found"));

    let corpus_error: SymdexError = CorpusError::NotFound(PathBuf::from("url.json")).into();
    assert_eq!(
        corpus_error.to_string(),
        "Corpus error: Corpus file not found: url.json"
    );

    let config_error: SymdexError = ConfigError::MissingValue("corpus.path".to_string()).into();
    assert_eq!(
        config_error.to_string(),
        "Configuration error: Missing required configuration value: corpus.path"
    );
}

/// Test that corpus read errors carry the path and the IO cause.
#[test]
fn test_corpus_read_error_display() {
    let err = CorpusError::Read {
        path: PathBuf::from("/tmp/url.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to read corpus file /tmp/url.json: denied"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    let context = ErrorContext::new(SymdexError::Custom("test error".to_string()), "test_component");
    report_error(&context);

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used without a subscriber.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(SymdexError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(&context);
}
