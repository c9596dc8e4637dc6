// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use redact_hook::engine_core::constants::redaction::{MAX_TEXT_CHARS, TRUNCATION_SEPARATOR};
use redact_hook::{RedactionProfile, Redactor};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let redactor = Redactor::new(RedactionProfile::ToolOutput).unwrap();
    let out = redactor.redact_text(text);

    // Output length is bounded no matter what went in.
    assert!(out.chars().count() <= MAX_TEXT_CHARS + TRUNCATION_SEPARATOR.chars().count());

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        let _ = redactor.redact_tree(&value);
    }
});
