// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Xcode bot test result parsing
//!
//! An Xcode Server integration reports its tests as a JSON object keyed by
//! test group, each mapping to the runs recorded for that group:
//!
//! ```json
//! {
//!   "LayoutTests": [
//!     {
//!       "failed": 1,
//!       "passed": 12,
//!       "failureSummaries": [
//!         {"message": "XCTAssertEqual failed", "lineNumber": 42, "fileName": "/.../LayoutTests.swift"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use xcbot_results::parser::{TestResultParser, try_parse_results};
//!
//! let payload = br#"{"TestA": [{"failed": 1, "passed": 2}], "TestB": [{"failed": 0, "passed": 5}]}"#;
//!
//! let all = try_parse_results(payload, false).unwrap();
//! assert_eq!(all.len(), 2);
//!
//! let failed = TestResultParser::new().only_failed(true).parse(payload);
//! assert_eq!(failed.len(), 1);
//! assert_eq!(failed[0].name, "TestA");
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::error::ResultsError;
use crate::path::clean_file_name;
use crate::result::{FailureLocation, TestResultSummary};

// ============================================================================
// Wire Types
// ============================================================================

/// Decoded payload: runs recorded per test group
type RawResults = BTreeMap<String, Vec<RawEntry>>;

/// One recorded run of a test group
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    failed: u64,
    passed: u64,
    failure_summaries: Option<Vec<RawFailureSummary>>,
}

/// One failure as reported by the bot
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFailureSummary {
    message: String,
    line_number: u64,
    file_name: String,
}

impl RawFailureSummary {
    fn into_location(self) -> FailureLocation {
        FailureLocation {
            file_name: clean_file_name(&self.file_name).into_owned(),
            line_number: self.line_number,
            message: self.message,
        }
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Parser for Xcode bot test result payloads
///
/// Defaults to keeping every group and reporting decode failures through
/// [`TracingSink`].
#[derive(Debug, Clone, Default)]
pub struct TestResultParser<S = TracingSink> {
    only_failed: bool,
    sink: S,
}

impl TestResultParser {
    /// Create a parser that keeps every group
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DiagnosticSink> TestResultParser<S> {
    /// Keep only groups with at least one failed test
    #[must_use]
    pub fn only_failed(mut self, only_failed: bool) -> Self {
        self.only_failed = only_failed;
        self
    }

    /// Replace the sink that receives decode failures from [`parse`](Self::parse)
    #[must_use]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> TestResultParser<T> {
        TestResultParser {
            only_failed: self.only_failed,
            sink,
        }
    }

    /// Parse a payload, reporting decode failures as an error
    ///
    /// Summaries are returned in ascending order of group name.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::Decode` if the buffer is not JSON or does not
    /// match the expected shape.
    pub fn try_parse(&self, buffer: &[u8]) -> Result<Vec<TestResultSummary>, ResultsError> {
        let raw: RawResults = serde_json::from_slice(buffer)?;
        let groups = raw.len();

        let summaries: Vec<TestResultSummary> = raw
            .into_iter()
            .map(|(name, entries)| summarize(name, entries))
            .filter(|summary| !self.only_failed || summary.has_failures())
            .collect();

        debug!(
            groups,
            kept = summaries.len(),
            failed = summaries.iter().filter(|s| s.has_failures()).count(),
            "Parsed bot test results"
        );

        Ok(summaries)
    }

    /// Parse a payload, yielding no summaries if it cannot be decoded
    ///
    /// The decode failure is described to the parser's sink exactly once.
    #[must_use]
    pub fn parse(&self, buffer: &[u8]) -> Vec<TestResultSummary> {
        self.try_parse(buffer).unwrap_or_else(|err| {
            self.sink.emit(&err.to_string());
            Vec::new()
        })
    }
}

/// Reduce every run recorded for one group into a summary
fn summarize(name: String, entries: Vec<RawEntry>) -> TestResultSummary {
    let mut failed_count = 0u64;
    let mut passed_count = 0u64;
    let mut locations = Vec::new();

    for entry in entries {
        failed_count = failed_count.saturating_add(entry.failed);
        passed_count = passed_count.saturating_add(entry.passed);

        if let Some(summaries) = entry.failure_summaries {
            locations.extend(summaries.into_iter().map(RawFailureSummary::into_location));
        }
    }

    TestResultSummary {
        name,
        failed_count,
        passed_count,
        locations,
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Parse a payload with the default parser, yielding no summaries on failure
#[must_use]
pub fn parse_results(buffer: &[u8], only_failed: bool) -> Vec<TestResultSummary> {
    TestResultParser::new().only_failed(only_failed).parse(buffer)
}

/// Parse a payload with the default parser
///
/// # Errors
///
/// Returns `ResultsError::Decode` if the payload cannot be decoded.
pub fn try_parse_results(
    buffer: &[u8],
    only_failed: bool,
) -> Result<Vec<TestResultSummary>, ResultsError> {
    TestResultParser::new()
        .only_failed(only_failed)
        .try_parse(buffer)
}
