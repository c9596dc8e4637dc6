use serde::Serialize;
use tracing::info;

use crate::engine_core::constants::targets;

#[derive(Serialize)]
struct AuditEntry<'a> {
    event_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool: Option<&'a str>,
    decision: &'a str,
    details: &'a serde_json::Value,
}

/// Emits one structured record per hook evaluation.
///
/// Callers must only pass redacted data as `details`.
pub struct AuditLogger;

impl AuditLogger {
    pub fn log(
        event_type: &str,
        tool: Option<&str>,
        decision: &str,
        details: &serde_json::Value,
    ) {
        let entry = AuditEntry {
            event_type,
            tool,
            decision,
            details,
        };

        let payload = serde_json::to_string(&entry).unwrap_or_default();

        info!(
            target: targets::AUDIT,
            event = event_type,
            decision = decision,
            payload = %payload,
            "HOOK_AUDIT_LOG"
        );
    }
}
