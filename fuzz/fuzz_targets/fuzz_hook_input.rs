// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use redact_hook::hook::pipeline::{self, HookEvent};

fuzz_target!(|data: &[u8]| {
    // Any byte sequence must map to one of the three exit codes, never a panic.
    for event in [HookEvent::PreToolUse, HookEvent::PostToolUse] {
        let resp = pipeline::run(event, data);
        assert!(matches!(resp.exit_code, 0..=2));
        if resp.exit_code != 0 {
            assert!(resp.stdout.is_none());
        }
    }
});
