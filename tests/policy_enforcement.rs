//! Integration tests for hook policy enforcement
//! Covers:
//! - Auth-header fetch blocking for shell tools
//! - Documentation read fast path
//! - Redacted argument copies
//! - Post-call output scrubbing

use redact_hook::engine_core::constants::{hook, redaction::SENTINEL};
use redact_hook::engine_core::models::{HookOutput, ToolInvocation, ToolResult};
use redact_hook::{Decision, PostCallFilter, PreCallGuard};
use serde_json::{json, Value};

// --- Helpers ---

fn guard() -> PreCallGuard {
    PreCallGuard::new().expect("Failed to build guard")
}

fn filter() -> PostCallFilter {
    PostCallFilter::new().expect("Failed to build filter")
}

fn bash(command: &str) -> ToolInvocation {
    ToolInvocation::from_value(&json!({"tool_name": "Bash", "tool_input": {"command": command}}))
}

fn read(path: &str) -> ToolInvocation {
    ToolInvocation::from_value(&json!({"tool_name": "Read", "tool_input": {"file_path": path}}))
}

fn block() -> Decision {
    Decision::Block {
        reason: hook::REASON_AUTH_HEADER_FETCH.to_string(),
    }
}

// --- Blocking ---

#[test]
fn test_auth_header_fetches_blocked() {
    let guard = guard();
    let commands = [
        r#"curl -H "Authorization: Bearer xyz" https://api.example.com"#,
        "wget --header 'Authorization: Basic abc' https://a.example",
        "CURL -s -H 'X-Api-Key: 123' https://b.example",
        "curl --header \"api-key: 1\" https://c.example",
        "echo go && curl -X POST -H 'authorization: t' https://d.example",
    ];
    for cmd in commands {
        assert_eq!(guard.evaluate(&bash(cmd)).0, block(), "{cmd}");
    }
}

#[test]
fn test_fetches_without_auth_header_not_blocked() {
    let guard = guard();
    let commands = [
        "curl https://example.com",
        "curl -H 'Accept: application/json' https://example.com",
        "wget https://example.com/authorization.txt",
        "curlish -H 'Authorization: x'",
        "grep -H authorization src/",
    ];
    for cmd in commands {
        assert_eq!(guard.evaluate(&bash(cmd)).0, Decision::NoOpinion, "{cmd}");
    }
}

#[test]
fn test_block_maps_to_deny() {
    // The pipeline reports blocks through the exit code; the document form
    // is still well defined for library callers.
    let doc = serde_json::to_value(HookOutput::pre_tool_use(&block())).unwrap();
    assert_eq!(doc["hookSpecificOutput"]["permissionDecision"], "deny");
    assert_eq!(
        doc["hookSpecificOutput"]["permissionDecisionReason"],
        hook::REASON_AUTH_HEADER_FETCH
    );
}

// --- Fast path ---

#[test]
fn test_doc_reads_fast_path() {
    let guard = guard();
    for path in ["README.md", "docs/guide.mdx", "notes.txt", "package.json"] {
        assert_eq!(
            guard.evaluate(&read(path)).0,
            Decision::Allow {
                reason: hook::REASON_DOCS_READ.to_string()
            },
            "{path}"
        );
    }
    for path in ["main.rs", "notes.exe", "README.MD", "notes.md.bak", ""] {
        assert_eq!(guard.evaluate(&read(path)).0, Decision::NoOpinion, "{path}");
    }
}

#[test]
fn test_unknown_tool_no_opinion() {
    let inv = ToolInvocation::from_value(&json!({
        "tool_name": "Grep",
        "tool_input": {"pattern": "password", "file_path": "a.md"}
    }));
    assert_eq!(guard().evaluate(&inv).0, Decision::NoOpinion);
}

// --- Redacted copies ---

#[test]
fn test_redacted_copy_hides_secrets() {
    let (decision, redacted) = guard().evaluate(&bash("echo api_key=sk-abcdef1234567890123456"));
    assert_eq!(decision, Decision::NoOpinion);
    assert_eq!(
        redacted.tool_input,
        json!({"command": format!("echo api_key={SENTINEL}")})
    );
}

#[test]
fn test_redacted_copy_masks_nested_sensitive_keys() {
    let inv = ToolInvocation::from_value(&json!({
        "tool_name": "WebFetch",
        "tool_input": {
            "url": "https://example.com",
            "request": {"Headers": {"x": "y"}, "auth": "basic", "retries": 3},
            "notes": ["secret: hunter2", "plain"]
        }
    }));
    let (_, redacted) = guard().evaluate(&inv);
    assert_eq!(
        redacted.tool_input,
        json!({
            "url": "https://example.com",
            "request": {"Headers": SENTINEL, "auth": SENTINEL, "retries": 3},
            "notes": [format!("secret: {SENTINEL}"), "plain"]
        })
    );
}

// --- Post-call ---

#[test]
fn test_post_call_scrubs_text_fields() {
    let result = ToolResult::from_value(&json!({
        "tool_response": {
            "stdout": "token: abcd1234567890abcdef1234",
            "stderr": "bearer=xyz",
            "body": "ok",
            "exit_code": 0,
            "extra": "password=still-here"
        }
    }));
    let ctx = filter().annotate(&result);
    assert_eq!(ctx.note, hook::ADVISORY_SANITIZED);
    assert_eq!(ctx.redacted_fields, vec!["stdout", "stderr"]);
    assert_eq!(
        ctx.sanitized_response,
        json!({
            "stdout": format!("token: {SENTINEL}"),
            "stderr": format!("bearer={SENTINEL}"),
            "body": "ok",
            "exit_code": 0,
            "extra": "password=still-here"
        })
    );
}

#[test]
fn test_post_call_ignores_non_string_fields() {
    let result = ToolResult::from_value(&json!({
        "tool_response": {"content": [{"type": "text", "text": "key=abc"}]}
    }));
    let ctx = filter().annotate(&result);
    assert!(ctx.redacted_fields.is_empty());
    assert_eq!(ctx.sanitized_response, result.tool_response);
}

#[test]
fn test_post_call_advisory_document() {
    let ctx = filter().annotate(&ToolResult::from_value(&Value::Null));
    let doc = serde_json::to_value(HookOutput::post_tool_use(&ctx)).unwrap();
    assert_eq!(
        doc,
        json!({"hookSpecificOutput": {
            "hookEventName": "PostToolUse",
            "additionalContext": hook::ADVISORY_SANITIZED
        }})
    );
}
