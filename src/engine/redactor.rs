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

//! Redaction engine.
//!
//! `redact_text` runs the ordered matchers over a string and then bounds its
//! size; `redact_tree` walks a JSON value, masking whole values under
//! sensitive keys and scrubbing every other string.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::engine::matchers::{
    KeyPrefixMatcher, LabeledSecretMatcher, LongTokenMatcher, SecretMatcher,
};
use crate::engine::rules::{self, TOOL_INPUT_LABELS, TOOL_OUTPUT_LABELS};
use crate::engine_core::constants::redaction::{
    KEEP_HEAD_CHARS, KEEP_TAIL_CHARS, MAX_TEXT_CHARS, SENTINEL, TRUNCATION_SEPARATOR,
};
use crate::engine_core::errors::HookError;

/// Which side of the tool call is being redacted. The profiles differ only in
/// the label vocabulary of the labeled-secret matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedactionProfile {
    ToolInput,
    ToolOutput,
}

impl RedactionProfile {
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            RedactionProfile::ToolInput => TOOL_INPUT_LABELS,
            RedactionProfile::ToolOutput => TOOL_OUTPUT_LABELS,
        }
    }
}

pub struct Redactor {
    matchers: Vec<Box<dyn SecretMatcher>>,
}

impl Redactor {
    /// Built-in matchers in their fixed order: long tokens, labeled secrets,
    /// `sk-` keys.
    pub fn new(profile: RedactionProfile) -> Result<Self, HookError> {
        Ok(Self::with_matchers(vec![
            Box::new(LongTokenMatcher::new()?),
            Box::new(LabeledSecretMatcher::new(profile.labels())?),
            Box::new(KeyPrefixMatcher::new()?),
        ]))
    }

    pub fn with_matchers(matchers: Vec<Box<dyn SecretMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Redact `text`, then bound it to [`MAX_TEXT_CHARS`].
    ///
    /// Idempotent for text that needs no truncation. A cut can land inside
    /// an alphanumeric run that had no word boundary in the full text (for
    /// example the tail of `x_aaaa...`); next to the separator that run now
    /// starts on a boundary, so a second pass may redact it.
    pub fn redact_text(&self, text: &str) -> String {
        let mut out = text.to_string();
        for matcher in &self.matchers {
            // Later matchers see the output of earlier ones.
            let replaced = match matcher.redact(&out) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = replaced {
                out = s;
            }
        }
        truncate_middle(out)
    }

    /// Recurses once per nesting level; hook documents are capped at
    /// `input::MAX_NESTING_DEPTH` before they get here.
    pub fn redact_tree(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut clean = Map::with_capacity(map.len());
                for (key, child) in map {
                    let redacted = if rules::is_sensitive_key(key) {
                        Value::String(SENTINEL.to_string())
                    } else {
                        self.redact_tree(child)
                    };
                    clean.insert(key.clone(), redacted);
                }
                Value::Object(clean)
            }
            Value::Array(items) => Value::Array(items.iter().map(|v| self.redact_tree(v)).collect()),
            Value::String(s) => Value::String(self.redact_text(s)),
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }
}

/// Keep the first and last chars of an oversized string around a separator.
/// Lengths are counted in chars, not bytes.
fn truncate_middle(text: String) -> String {
    let total = text.chars().count();
    if total <= MAX_TEXT_CHARS {
        return text;
    }

    let head_end = byte_offset(&text, KEEP_HEAD_CHARS);
    let tail_start = byte_offset(&text, total - KEEP_TAIL_CHARS);

    let mut out =
        String::with_capacity(head_end + TRUNCATION_SEPARATOR.len() + (text.len() - tail_start));
    out.push_str(&text[..head_end]);
    out.push_str(TRUNCATION_SEPARATOR);
    out.push_str(&text[tail_start..]);
    out
}

/// Byte offset of the `n`th char (or the end of the string).
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
