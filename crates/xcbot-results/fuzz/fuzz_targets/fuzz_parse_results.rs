// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for bot test result parsing
//!
//! This fuzzes `TestResultParser` with raw bytes, which are fed straight to
//! the JSON decoder without a UTF-8 check.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xcbot_results::{NoopSink, TestResultParser};

fuzz_target!(|data: &[u8]| {
    let parser = TestResultParser::new().with_sink(NoopSink);

    // parse should never panic, and the filtered result is a subset
    let all = parser.parse(data);
    let failed = parser.clone().only_failed(true).parse(data);
    assert!(failed.len() <= all.len());
});
