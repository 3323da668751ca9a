// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcbot library
//!
//! This module exports the command's configuration and rendering for use in
//! integration tests.

pub mod config;
pub mod output;

use std::io::Read;

use anyhow::Context;
use tracing::{debug, info};
use xcbot_results::{TestResultParser, failed_total};

use crate::config::{Config, InputSource};

/// Read the payload, parse it and render the report
///
/// `stdin` is only read when the configuration selects it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read, or the payload cannot be decoded.
pub fn run(config: &Config, stdin: impl Read) -> anyhow::Result<String> {
    config.validate()?;

    let payload = read_input(&config.input_source(), stdin)?;
    debug!(bytes = payload.len(), "Read test results payload");

    let results = TestResultParser::new()
        .only_failed(config.only_failed)
        .try_parse(&payload)?;

    info!(
        groups = results.len(),
        failed = failed_total(&results),
        "Summarised bot test results"
    );

    let rendered = output::render(&results, config.format, &config.integration_context())
        .context("Failed to render results")?;
    Ok(rendered)
}

fn read_input(source: &InputSource, mut stdin: impl Read) -> anyhow::Result<Vec<u8>> {
    match source {
        InputSource::File(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
