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

//! Post-call filter.
//!
//! Scrubs the well-known text fields of a tool response and attaches a fixed
//! advisory note. It has no decision authority and cannot block.

use serde_json::Value;
use tracing::debug;

use crate::engine::redactor::{RedactionProfile, Redactor};
use crate::engine::rules::RESULT_TEXT_FIELDS;
use crate::engine_core::constants::hook;
use crate::engine_core::errors::HookError;
use crate::engine_core::models::{AdvisoryContext, ToolResult};

pub struct PostCallFilter {
    redactor: Redactor,
}

impl PostCallFilter {
    pub fn new() -> Result<Self, HookError> {
        Ok(Self {
            redactor: Redactor::new(RedactionProfile::ToolOutput)?,
        })
    }

    pub fn annotate(&self, result: &ToolResult) -> AdvisoryContext {
        let mut sanitized = result.tool_response.clone();
        let mut redacted_fields = Vec::new();

        if let Value::Object(fields) = &mut sanitized {
            for name in RESULT_TEXT_FIELDS {
                if let Some(Value::String(text)) = fields.get_mut(*name) {
                    let clean = self.redactor.redact_text(text);
                    if clean != *text {
                        redacted_fields.push(name.to_string());
                        *text = clean;
                    }
                }
            }
        }

        if !redacted_fields.is_empty() {
            debug!(fields = ?redacted_fields, "Redacted tool output");
        }

        AdvisoryContext {
            note: hook::ADVISORY_SANITIZED.to_string(),
            sanitized_response: sanitized,
            redacted_fields,
        }
    }
}
