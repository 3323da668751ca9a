// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for failure path cleaning

#![no_main]

use libfuzzer_sys::fuzz_target;

use xcbot_results::clean_file_name;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let cleaned = clean_file_name(input);
        // Cleaning only ever removes a prefix
        assert!(input.ends_with(cleaned.as_ref()));
    }
});
