// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown digest of failed tests for a bot integration
//!
//! The digest is meant to be posted as a pull-request comment, so it lists
//! only groups that failed and is absent altogether for a clean integration.

use serde::{Deserialize, Serialize};

use crate::result::TestResultSummary;

/// Where a set of results came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationContext {
    /// Xcode Server host name
    pub server_name: Option<String>,
    /// Integration identifier on that server
    pub integration_id: Option<String>,
}

impl IntegrationContext {
    /// Create a context with no server or integration information
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server name
    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = Some(server_name.into());
        self
    }

    /// Set the integration identifier
    #[must_use]
    pub fn with_integration_id(mut self, integration_id: impl Into<String>) -> Self {
        self.integration_id = Some(integration_id.into());
        self
    }

    /// Render a Markdown digest of the failed groups
    ///
    /// Returns `None` when no group has failures.
    #[must_use]
    pub fn digest(&self, results: &[TestResultSummary]) -> Option<String> {
        let failed = failed_total(results);
        if failed == 0 {
            return None;
        }

        let noun = if failed == 1 { "test" } else { "tests" };
        let mut out = format!("**{failed} failed {noun}**");
        if let Some(id) = &self.integration_id {
            out.push_str(&format!(" in integration {id}"));
        }
        if let Some(server) = &self.server_name {
            out.push_str(&format!(" on {server}"));
        }
        out.push_str("\n\n");

        for summary in results.iter().filter(|s| s.has_failures()) {
            out.push_str(&format!(
                "- `{}` ({} failed, {} passed)\n",
                summary.name, summary.failed_count, summary.passed_count
            ));
            for location in &summary.locations {
                out.push_str(&format!(
                    "  - `{}`: {}\n",
                    location.display_location(),
                    location.message
                ));
            }
        }

        Some(out)
    }
}

/// Total failed tests across all groups
#[must_use]
pub fn failed_total(results: &[TestResultSummary]) -> u64 {
    results
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.failed_count))
}
