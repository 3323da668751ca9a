// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the xcbot command
//!
//! This module provides the command-line options, including the payload
//! source, output format, digest context and logging options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xcbot_results::IntegrationContext;

/// xcbot - summarise Xcode Server bot test results
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "xcbot")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to a test results JSON payload
    ///
    /// Reads from stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Only report test groups with at least one failure
    #[arg(short = 'f', long, env = "XCBOT_ONLY_FAILED")]
    pub only_failed: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t, env = "XCBOT_FORMAT")]
    pub format: OutputFormat,

    /// Xcode Server name shown in the digest header
    #[arg(short, long = "server", env = "XCBOT_SERVER")]
    pub server_name: Option<String>,

    /// Integration identifier shown in the digest header
    #[arg(short, long = "integration", env = "XCBOT_INTEGRATION")]
    pub integration_id: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How results are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per test group followed by its failure locations
    #[default]
    Text,
    /// Pretty-printed JSON array of summaries
    Json,
    /// Markdown digest of failed groups
    Digest,
}

/// Where the payload is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Config {
    /// Resolve the payload source, treating `-` as stdin
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// Build the digest context from the server and integration options
    #[must_use]
    pub fn integration_context(&self) -> IntegrationContext {
        IntegrationContext {
            server_name: self.server_name.clone(),
            integration_id: self.integration_id.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is given but doesn't exist or is
    /// not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let InputSource::File(path) = self.input_source() {
            if !path.exists() {
                return Err(ConfigError::InputNotFound(path));
            }
            if !path.is_file() {
                return Err(ConfigError::InputNotFile(path));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
