// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcbot-results: Xcode Server bot test result processing for xcbot
//!
//! This library crate turns the test result JSON reported by an Xcode Server
//! bot integration into per-group summaries of failure counts and failure
//! locations, with build-server path prefixes stripped.
//!
//! # Example
//!
//! ```
//! use xcbot_results::{IntegrationContext, TestResultParser};
//!
//! let payload = br#"{"TestA": [{"failed": 1, "passed": 2, "failureSummaries": [
//!     {"message": "assert", "lineNumber": 10,
//!      "fileName": "/x/XCSBuilder/Bots/id1/Source/P/M/Unit Tests/T.swift"}]}]}"#;
//!
//! let results = TestResultParser::new().only_failed(true).parse(payload);
//! assert_eq!(results[0].locations[0].file_name, "Unit Tests/T.swift");
//!
//! let digest = IntegrationContext::new().with_integration_id("42").digest(&results);
//! assert!(digest.is_some());
//! ```

pub mod diagnostic;
pub mod digest;
pub mod error;
pub mod parser;
pub mod path;
pub mod result;

pub use diagnostic::{DiagnosticSink, NoopSink, TracingSink};
pub use digest::{IntegrationContext, failed_total};
pub use error::ResultsError;
pub use parser::{TestResultParser, parse_results, try_parse_results};
pub use path::clean_file_name;
pub use result::{FailureLocation, TestResultSummary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::diagnostic::DiagnosticSink;
    pub use crate::error::ResultsError;
    pub use crate::parser::{TestResultParser, parse_results};
    pub use crate::result::{FailureLocation, TestResultSummary};
}
