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

//! Hook pipeline.
//!
//! Turns one raw input document into one [`HookResponse`]: the exit code, the
//! stdout document and the stderr message. No I/O happens here, so the whole
//! boundary contract can be tested without spawning a process.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::filter::PostCallFilter;
use crate::engine::guard::PreCallGuard;
use crate::engine_core::audit::AuditLogger;
use crate::engine_core::constants::{exit, hook, input};
use crate::engine_core::errors::HookError;
use crate::engine_core::models::{Decision, HookOutput, ToolInvocation, ToolResult};

/// Which hook the process was invoked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    PreToolUse,
    PostToolUse,
}

impl HookEvent {
    pub fn name(&self) -> &'static str {
        match self {
            HookEvent::PreToolUse => hook::EVENT_PRE_TOOL_USE,
            HookEvent::PostToolUse => hook::EVENT_POST_TOOL_USE,
        }
    }
}

/// Everything the process reports back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResponse {
    pub exit_code: u8,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl HookResponse {
    fn proceed(output: &HookOutput) -> Result<Self, HookError> {
        Ok(Self {
            exit_code: exit::PROCEED,
            stdout: Some(serde_json::to_string(output).map_err(HookError::Encode)?),
            stderr: None,
        })
    }

    fn block(reason: &str) -> Self {
        Self {
            exit_code: exit::BLOCK,
            stdout: None,
            stderr: Some(reason.to_string()),
        }
    }

    pub fn from_error(err: &HookError) -> Self {
        Self {
            exit_code: err.exit_code(),
            stdout: None,
            stderr: Some(err.to_string()),
        }
    }
}

/// Parse the top-level document. The only input the hooks reject.
///
/// serde_json's own recursion limit (128) is replaced by
/// [`input::MAX_NESTING_DEPTH`], checked before any recursive parsing starts.
/// Everything downstream (`redact_tree`, the audit encoder) recurses no
/// deeper than this.
pub fn parse_document(raw: &[u8]) -> Result<Value, HookError> {
    if nesting_depth(raw) > input::MAX_NESTING_DEPTH {
        return Err(HookError::TooDeep(input::MAX_NESTING_DEPTH));
    }
    let mut de = serde_json::Deserializer::from_slice(raw);
    de.disable_recursion_limit();
    let doc = Value::deserialize(&mut de).map_err(HookError::InvalidInput)?;
    de.end().map_err(HookError::InvalidInput)?;
    Ok(doc)
}

/// Deepest array/object nesting of a JSON text. Brackets inside strings do
/// not count; malformed text is left for the parser to reject.
fn nesting_depth(raw: &[u8]) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for &b in raw {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Run the hook for `event` and fold every error into the response.
pub fn run(event: HookEvent, raw: &[u8]) -> HookResponse {
    let result = match event {
        HookEvent::PreToolUse => {
            PreCallGuard::new().and_then(|guard| run_pre_tool_use(&guard, raw))
        }
        HookEvent::PostToolUse => {
            PostCallFilter::new().and_then(|filter| run_post_tool_use(&filter, raw))
        }
    };
    result.unwrap_or_else(|e| HookResponse::from_error(&e))
}

pub fn run_pre_tool_use(guard: &PreCallGuard, raw: &[u8]) -> Result<HookResponse, HookError> {
    let doc = parse_document(raw)?;
    let invocation = ToolInvocation::from_value(&doc);
    let (decision, redacted) = guard.evaluate(&invocation);

    AuditLogger::log(
        hook::EVENT_PRE_TOOL_USE,
        Some(&redacted.tool_name),
        decision.label(),
        &redacted.tool_input,
    );

    match &decision {
        Decision::Block { reason } => Ok(HookResponse::block(reason)),
        Decision::Allow { .. } | Decision::NoOpinion => {
            HookResponse::proceed(&HookOutput::pre_tool_use(&decision))
        }
    }
}

pub fn run_post_tool_use(filter: &PostCallFilter, raw: &[u8]) -> Result<HookResponse, HookError> {
    let doc = parse_document(raw)?;
    let result = ToolResult::from_value(&doc);
    let advisory = filter.annotate(&result);

    AuditLogger::log(
        hook::EVENT_POST_TOOL_USE,
        None,
        "annotate",
        &json!({
            "redacted_fields": &advisory.redacted_fields,
            "tool_response": &advisory.sanitized_response,
        }),
    );

    HookResponse::proceed(&HookOutput::post_tool_use(&advisory))
}
