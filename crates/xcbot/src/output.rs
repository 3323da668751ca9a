// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering of parsed summaries for stdout

use xcbot_results::{IntegrationContext, TestResultSummary};

use crate::config::OutputFormat;

/// Shown in digest mode when nothing failed
pub const NO_FAILURES: &str = "No failed tests.\n";

/// Render summaries in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    results: &[TestResultSummary],
    format: OutputFormat,
    context: &IntegrationContext,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(results)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Digest => Ok(context
            .digest(results)
            .unwrap_or_else(|| NO_FAILURES.to_string())),
    }
}

/// One line per group, each failure location indented beneath it
#[must_use]
pub fn render_text(results: &[TestResultSummary]) -> String {
    let mut out = String::new();
    for summary in results {
        out.push_str(&format!(
            "{}: {} failed, {} passed\n",
            summary.name, summary.failed_count, summary.passed_count
        ));
        for location in &summary.locations {
            out.push_str(&format!(
                "    {}: {}\n",
                location.display_location(),
                location.message
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use xcbot_results::FailureLocation;

    fn sample() -> Vec<TestResultSummary> {
        vec![
            TestResultSummary {
                name: "TestA".to_string(),
                failed_count: 1,
                passed_count: 2,
                locations: vec![FailureLocation {
                    file_name: "Unit Tests/T.swift".to_string(),
                    line_number: 10,
                    message: "assert".to_string(),
                }],
            },
            TestResultSummary {
                name: "TestB".to_string(),
                failed_count: 0,
                passed_count: 5,
                locations: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&sample()),
            "TestA: 1 failed, 2 passed\n    Unit Tests/T.swift:10: assert\nTestB: 0 failed, 5 passed\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), OutputFormat::Json, &IntegrationContext::new())
            .expect("Should render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("Should be JSON");
        assert_eq!(value[0]["name"], "TestA");
        assert_eq!(value[0]["locations"][0]["fileName"], "Unit Tests/T.swift");
        assert_eq!(value[1]["failedCount"], 0);
    }

    #[test]
    fn test_render_digest() {
        let context = IntegrationContext::new().with_integration_id("42");
        let out = render(&sample(), OutputFormat::Digest, &context).expect("Should render");
        assert!(out.starts_with("**1 failed test** in integration 42\n\n- `TestA`"));
    }

    #[test]
    fn test_render_digest_without_failures() {
        let results = sample();
        let out = render(&results[1..], OutputFormat::Digest, &IntegrationContext::new())
            .expect("Should render");
        assert_eq!(out, NO_FAILURES);
    }
}
