// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! redact-hook constants - single source of truth for wire values and limits.
//!
//! Everything the orchestrator can observe (exit codes, event names, fixed
//! messages) or that bounds the engine's output lives here.

/// Redaction output
pub mod redaction {
    /// Sentinel written in place of every redacted value
    pub const SENTINEL: &str = "★★★REDACTED★★★";
    /// Strings longer than this (in chars, after substitution) are truncated
    pub const MAX_TEXT_CHARS: usize = 50_000;
    /// Chars kept from the start of a truncated string
    pub const KEEP_HEAD_CHARS: usize = 25_000;
    /// Chars kept from the end of a truncated string
    pub const KEEP_TAIL_CHARS: usize = 25_000;
    /// Line inserted between head and tail of a truncated string
    pub const TRUNCATION_SEPARATOR: &str = "\n... ★★★REDACTED★★★ ...";
}

/// Input document limits
pub mod input {
    /// Deepest array/object nesting accepted in a hook document
    pub const MAX_NESTING_DEPTH: usize = 1000;
}

/// Process exit codes understood by the orchestrator
pub mod exit {
    /// Proceed, no objection
    pub const PROCEED: u8 = 0;
    /// Malformed input (an error, not a security decision)
    pub const INPUT_ERROR: u8 = 1;
    /// Block the tool call
    pub const BLOCK: u8 = 2;
}

/// Hook document fields
pub mod hook {
    pub const EVENT_PRE_TOOL_USE: &str = "PreToolUse";
    pub const EVENT_POST_TOOL_USE: &str = "PostToolUse";
    pub const REASON_DOCS_READ: &str = "documentation read auto-approved";
    pub const REASON_AUTH_HEADER_FETCH: &str = "Blocking Bash call that would echo auth headers";
    pub const ADVISORY_SANITIZED: &str = "Outputs sanitized by redaction policy";
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_LOG_LEVEL: &str = "REDACT_HOOK_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "REDACT_HOOK_LOG_FORMAT";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_LOG_FORMAT: &str = "text";
}

/// Tracing targets
pub mod targets {
    pub const AUDIT: &str = "audit";
}
