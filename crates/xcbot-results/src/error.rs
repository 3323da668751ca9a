// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for xcbot-results

use thiserror::Error;

/// Errors that can occur while decoding bot test results
#[derive(Debug, Error)]
pub enum ResultsError {
    /// The payload is not JSON, or does not have the expected shape
    #[error("Failed to decode test results: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ResultsError::from(err);
        assert!(
            err.to_string()
                .starts_with("Failed to decode test results: expected")
        );
    }
}
