// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Diagnostic sinks for parse failures
//!
//! [`TestResultParser::parse`](crate::parser::TestResultParser::parse) never
//! returns an error. Instead, a decode failure is described to a
//! [`DiagnosticSink`] and the parse yields no summaries.
//!
//! Closures work as sinks, which is handy for collecting diagnostics:
//!
//! ```
//! use std::cell::RefCell;
//! use xcbot_results::TestResultParser;
//!
//! let seen = RefCell::new(Vec::new());
//! let parser = TestResultParser::new().with_sink(|msg: &str| seen.borrow_mut().push(msg.to_string()));
//! assert!(parser.parse(b"not json").is_empty());
//! assert_eq!(seen.borrow().len(), 1);
//! ```

use tracing::warn;

/// Receives human-readable descriptions of parse failures
pub trait DiagnosticSink {
    /// Report a single diagnostic message
    fn emit(&self, message: &str);
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _message: &str) {}
}

/// Forwards diagnostics to `tracing` at warn level
///
/// Nothing is printed unless the host installs a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, message: &str) {
        warn!(target: "xcbot_results", error = %message, "Discarding undecodable test results");
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn emit(&self, message: &str) {
        self(message);
    }
}
