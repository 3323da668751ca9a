// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcbot: summarise Xcode Server bot test results
//!
//! Reads a bot integration's test result JSON from a file or stdin and
//! prints per-group failure summaries, a JSON report, or a Markdown digest.

use std::io::Write;

use clap::Parser;
use xcbot::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = xcbot::run(&config, std::io::stdin().lock())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
