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

//! Pre-call guard.
//!
//! Decides whether a proposed tool call is blocked, auto-approved or left to
//! the orchestrator, and produces a redacted copy of its arguments for the
//! audit trail. Rules are evaluated in order: hard blocks first, then the
//! documentation-read fast path, then no opinion.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::engine::redactor::{RedactionProfile, Redactor};
use crate::engine::rules::{self, CommandRule, ToolCapability};
use crate::engine_core::constants::hook;
use crate::engine_core::errors::HookError;
use crate::engine_core::models::{Decision, RedactedInvocation, ToolInvocation};

pub struct PreCallGuard {
    redactor: Redactor,
    block_rules: Vec<CommandRule>,
}

impl PreCallGuard {
    pub fn new() -> Result<Self, HookError> {
        Ok(Self {
            redactor: Redactor::new(RedactionProfile::ToolInput)?,
            block_rules: CommandRule::compile_block_rules()?,
        })
    }

    /// Primary entry point. The decision never depends on the redacted copy.
    pub fn evaluate(&self, invocation: &ToolInvocation) -> (Decision, RedactedInvocation) {
        let decision = self.decide(invocation);
        let redacted = RedactedInvocation {
            tool_name: invocation.tool_name.clone(),
            tool_input: self.redact_arguments(&invocation.tool_input),
        };
        (decision, redacted)
    }

    fn decide(&self, invocation: &ToolInvocation) -> Decision {
        let capability = rules::capability_of(&invocation.tool_name);

        // 1. Hard blocks on shell commands
        if capability == ToolCapability::Shell {
            let command = invocation.str_arg(rules::SHELL_COMMAND_ARG).unwrap_or_default();
            if let Some(rule) = self.block_rules.iter().find(|r| r.matches(command)) {
                info!(rule = rule.name, tool = %invocation.tool_name, "Blocking tool call");
                return Decision::Block {
                    reason: rule.reason.to_string(),
                };
            }
        }

        // 2. Documentation reads skip confirmation
        if capability == ToolCapability::FileRead {
            if let Some(path) = invocation.str_arg(rules::READ_PATH_ARG) {
                if rules::is_doc_read_path(path) {
                    debug!(tool = %invocation.tool_name, "Auto-approving documentation read");
                    return Decision::Allow {
                        reason: hook::REASON_DOCS_READ.to_string(),
                    };
                }
            }
        }

        Decision::NoOpinion
    }

    /// Redact tool arguments for logging.
    ///
    /// Top-level argument names belong to the tool's own schema, so each
    /// argument value is scrubbed with `redact_tree` instead of masking the
    /// top level by key. A shell `command` keeps its shape with only the
    /// secrets inside it replaced.
    pub fn redact_arguments(&self, tool_input: &Value) -> Value {
        match tool_input {
            Value::Object(args) => {
                let mut clean = Map::with_capacity(args.len());
                for (name, value) in args {
                    clean.insert(name.clone(), self.redactor.redact_tree(value));
                }
                Value::Object(clean)
            }
            other => self.redactor.redact_tree(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_core::constants::redaction::SENTINEL;
    use serde_json::json;

    fn invocation(tool: &str, input: Value) -> ToolInvocation {
        ToolInvocation {
            tool_name: tool.to_string(),
            tool_input: input,
        }
    }

    #[test]
    fn blocks_curl_with_auth_header() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "Bash",
            json!({"command": r#"curl -H "Authorization: Bearer xyz" https://api.example.com"#}),
        );
        let (decision, _) = guard.evaluate(&inv);
        assert_eq!(
            decision,
            Decision::Block {
                reason: hook::REASON_AUTH_HEADER_FETCH.to_string()
            }
        );
    }

    #[test]
    fn block_rule_only_for_shell_tools() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "WebFetch",
            json!({"command": "curl -H 'Authorization: x' https://a"}),
        );
        assert_eq!(guard.evaluate(&inv).0, Decision::NoOpinion);
    }

    #[test]
    fn block_wins_over_doc_read_path() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "Bash",
            json!({
                "command": r#"curl -H "Authorization: Bearer xyz" https://api.example.com"#,
                "file_path": "notes.md"
            }),
        );
        let (decision, redacted) = guard.evaluate(&inv);
        assert!(decision.is_block());
        assert_eq!(redacted.tool_input["file_path"], json!("notes.md"));
    }

    #[test]
    fn plain_curl_is_no_opinion() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation("Bash", json!({"command": "curl https://example.com"}));
        assert_eq!(guard.evaluate(&inv).0, Decision::NoOpinion);
    }

    #[test]
    fn missing_or_mistyped_command_is_no_opinion() {
        let guard = PreCallGuard::new().unwrap();
        assert_eq!(guard.evaluate(&invocation("Bash", json!({}))).0, Decision::NoOpinion);
        assert_eq!(
            guard.evaluate(&invocation("Bash", json!({"command": ["curl"]}))).0,
            Decision::NoOpinion
        );
        assert_eq!(guard.evaluate(&invocation("Bash", json!(null))).0, Decision::NoOpinion);
    }

    #[test]
    fn doc_reads_are_allowed() {
        let guard = PreCallGuard::new().unwrap();
        for path in ["notes.md", "a/b.mdx", "c.txt", "d.json"] {
            let (decision, _) = guard.evaluate(&invocation("Read", json!({"file_path": path})));
            assert_eq!(
                decision,
                Decision::Allow {
                    reason: hook::REASON_DOCS_READ.to_string()
                },
                "{path}"
            );
        }
    }

    #[test]
    fn other_reads_and_writes_are_no_opinion() {
        let guard = PreCallGuard::new().unwrap();
        let cases = [
            invocation("Read", json!({"file_path": "notes.exe"})),
            invocation("Read", json!({})),
            invocation("Read", json!({"file_path": 7})),
            invocation("Write", json!({"file_path": "notes.md", "content": "x"})),
            invocation("Bash", json!({"command": "cat notes.md", "file_path": "notes.md"})),
        ];
        for inv in cases {
            assert_eq!(guard.evaluate(&inv).0, Decision::NoOpinion, "{inv:?}");
        }
    }

    #[test]
    fn command_argument_is_scrubbed_not_masked() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "Bash",
            json!({"command": "echo api_key=sk-abcdef1234567890123456"}),
        );
        let (decision, redacted) = guard.evaluate(&inv);
        assert_eq!(decision, Decision::NoOpinion);
        assert_eq!(
            redacted.tool_input["command"],
            json!(format!("echo api_key={SENTINEL}"))
        );
    }

    #[test]
    fn nested_sensitive_keys_are_masked() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "WebFetch",
            json!({"url": "https://x", "options": {"headers": {"Authorization": "Bearer t"}}}),
        );
        let (_, redacted) = guard.evaluate(&inv);
        assert_eq!(
            redacted.tool_input,
            json!({"url": "https://x", "options": {"headers": SENTINEL}})
        );
    }

    #[test]
    fn blocked_call_still_gets_redacted_copy() {
        let guard = PreCallGuard::new().unwrap();
        let inv = invocation(
            "Bash",
            json!({"command": "curl -H 'Authorization: token=abc' https://x"}),
        );
        let (decision, redacted) = guard.evaluate(&inv);
        assert!(decision.is_block());
        assert_eq!(redacted.tool_name, "Bash");
        assert_eq!(
            redacted.tool_input["command"],
            json!(format!("curl -H 'Authorization: token={SENTINEL}' https://x"))
        );
        // The caller's invocation is untouched.
        assert!(inv.tool_input["command"].as_str().unwrap().contains("token=abc"));
    }
}
