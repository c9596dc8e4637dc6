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

//! Secret matchers.
//!
//! Each matcher finds one family of secrets in a string and replaces every
//! match with the sentinel. Matchers are applied in a fixed order by the
//! [`Redactor`](crate::engine::redactor::Redactor); none of them matches the
//! sentinel itself, so running a matcher over already redacted text is a
//! no-op for the parts that were redacted.

use std::borrow::Cow;

use regex::{Captures, NoExpand, Regex};

use crate::engine_core::constants::redaction::SENTINEL;
use crate::engine_core::errors::HookError;

/// One family of secrets.
pub trait SecretMatcher: Send + Sync {
    /// Stable name, used in logs and tests.
    fn name(&self) -> &'static str;

    /// Replace every non-overlapping match, left to right.
    fn redact<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// High-entropy opaque tokens of any vocabulary: 20+ alphanumerics, optionally
/// followed by one `_`/`-` and 10+ more.
pub struct LongTokenMatcher {
    regex: Regex,
}

impl LongTokenMatcher {
    pub fn new() -> Result<Self, HookError> {
        Ok(Self {
            regex: Regex::new(r"(?i)\b[a-z0-9]{20,}[_-]?[a-z0-9]{10,}\b")?,
        })
    }
}

impl SecretMatcher for LongTokenMatcher {
    fn name(&self) -> &'static str {
        "long-token"
    }

    fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(text, NoExpand(SENTINEL))
    }
}

/// `label: value` / `label=value` pairs. Only the value is replaced.
pub struct LabeledSecretMatcher {
    regex: Regex,
}

impl LabeledSecretMatcher {
    pub fn new(labels: &[&str]) -> Result<Self, HookError> {
        let alternation = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r#"(?i)(?P<prefix>\b(?:{alternation})\s*[:=]\s*["']?)(?P<value>[^\s"']+)"#
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

impl SecretMatcher for LabeledSecretMatcher {
    fn name(&self) -> &'static str {
        "labeled-secret"
    }

    fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex
            .replace_all(text, |caps: &Captures| format!("{}{}", &caps["prefix"], SENTINEL))
    }
}

/// `sk-` prefixed API keys.
pub struct KeyPrefixMatcher {
    regex: Regex,
}

impl KeyPrefixMatcher {
    pub fn new() -> Result<Self, HookError> {
        Ok(Self {
            regex: Regex::new(r"(?i)sk-[a-z0-9]{20,}")?,
        })
    }
}

impl SecretMatcher for KeyPrefixMatcher {
    fn name(&self) -> &'static str {
        "key-prefix"
    }

    fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(text, NoExpand(SENTINEL))
    }
}
