// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result summary types

use serde::{Deserialize, Serialize};

/// Summary of every run reported under one test group key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultSummary {
    /// Test or test group name (the payload's object key)
    pub name: String,
    /// Failed tests, summed across all entries for this name
    pub failed_count: u64,
    /// Passed tests, summed across all entries for this name
    pub passed_count: u64,
    /// Reported failures in encounter order
    pub locations: Vec<FailureLocation>,
}

impl TestResultSummary {
    /// Check if any test in this group failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count > 0
    }

    /// Total number of tests counted for this group
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.failed_count.saturating_add(self.passed_count)
    }
}

/// A single reported test failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureLocation {
    /// Source file, with the bot checkout prefix removed when recognised
    pub file_name: String,
    /// Line of the failing assertion
    pub line_number: u64,
    /// Failure description
    pub message: String,
}

impl FailureLocation {
    /// Format as `file:line`
    #[must_use]
    pub fn display_location(&self) -> String {
        format!("{}:{}", self.file_name, self.line_number)
    }
}
