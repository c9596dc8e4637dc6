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

//! Domain models for the redaction hooks.
//!
//! Pure data structures for tool invocations, tool results, decisions and the
//! hook document written back to the orchestrator. Free of I/O.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::engine_core::constants::hook;

/// A proposed tool call, as seen before the tool runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub tool_name: String,
    pub tool_input: Value,
}

impl ToolInvocation {
    /// Build from an arbitrary JSON document.
    ///
    /// Missing or mistyped fields default to "not applicable": an empty tool
    /// name and an empty argument map.
    pub fn from_value(doc: &Value) -> Self {
        let tool_name = doc
            .get("tool_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let tool_input = doc
            .get("tool_input")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        Self {
            tool_name,
            tool_input,
        }
    }

    /// String argument by name, if present and string-typed.
    pub fn str_arg(&self, name: &str) -> Option<&str> {
        self.tool_input.get(name).and_then(Value::as_str)
    }
}

/// A completed tool call, as seen after the tool ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub tool_response: Value,
}

impl ToolResult {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            tool_response: doc
                .get("tool_response")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

/// Policy evaluation decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Call auto-approved
    Allow { reason: String },
    /// Call must not run
    Block { reason: String },
    /// Defer to the orchestrator's default policy
    NoOpinion,
}

impl Decision {
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// Short label used in audit records.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Allow { .. } => "allow",
            Decision::Block { .. } => "block",
            Decision::NoOpinion => "no-opinion",
        }
    }

    /// Permission fields for the hook document. `None` means the fields are
    /// omitted entirely.
    pub fn permission(&self) -> Option<(PermissionDecision, &str)> {
        match self {
            Decision::Allow { reason } => Some((PermissionDecision::Allow, reason.as_str())),
            Decision::Block { reason } => Some((PermissionDecision::Deny, reason.as_str())),
            Decision::NoOpinion => None,
        }
    }
}

/// Tool arguments after redaction, safe to surface in logs.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactedInvocation {
    pub tool_name: String,
    pub tool_input: Value,
}

/// Result of the post-call filter. Advisory only.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryContext {
    pub note: String,
    /// Tool response with its textual fields sanitized
    pub sanitized_response: Value,
    /// Top-level fields whose text changed
    pub redacted_fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
}

/// Document written to stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<PermissionDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl HookOutput {
    pub fn pre_tool_use(decision: &Decision) -> Self {
        let (permission_decision, permission_decision_reason) = match decision.permission() {
            Some((p, reason)) => (Some(p), Some(reason.to_string())),
            None => (None, None),
        };
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: hook::EVENT_PRE_TOOL_USE,
                permission_decision,
                permission_decision_reason,
                additional_context: None,
            },
        }
    }

    pub fn post_tool_use(advisory: &AdvisoryContext) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: hook::EVENT_POST_TOOL_USE,
                permission_decision: None,
                permission_decision_reason: None,
                additional_context: Some(advisory.note.clone()),
            },
        }
    }
}
