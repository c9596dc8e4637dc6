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

//! Declarative rule tables.
//!
//! Every policy knob of the hooks is a table in this module: which keys carry
//! secrets by definition, which label words introduce a secret value, which
//! tools are shells or readers, which command shapes are blocked outright and
//! which reads are approved without asking. The matching logic elsewhere only
//! interprets these tables.

use regex::Regex;

use crate::engine_core::constants::hook;
use crate::engine_core::errors::HookError;

/// Map keys whose whole value is replaced, compared lowercased.
pub const SENSITIVE_KEYS: &[&str] = &[
    "content",
    "command",
    "headers",
    "authorization",
    "auth",
    "password",
];

/// Label words that introduce a secret in tool arguments.
pub const TOOL_INPUT_LABELS: &[&str] = &["api", "secret", "token", "key", "passwd", "password"];

/// Label words that introduce a secret in tool output. Superset of
/// [`TOOL_INPUT_LABELS`]: results also carry `bearer=...` style dumps.
pub const TOOL_OUTPUT_LABELS: &[&str] = &[
    "api", "secret", "token", "key", "passwd", "password", "bearer",
];

/// Top-level fields of a tool response that the post-call filter scrubs.
pub const RESULT_TEXT_FIELDS: &[&str] = &["stdout", "stderr", "body", "content"];

/// What a tool is able to do, as far as the guard cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCapability {
    /// Executes arbitrary shell commands
    Shell,
    /// Reads a file, never writes
    FileRead,
    Other,
}

/// Tool name -> capability. Names are matched exactly.
pub const TOOL_CAPABILITIES: &[(&str, ToolCapability)] = &[
    ("Bash", ToolCapability::Shell),
    ("Read", ToolCapability::FileRead),
];

pub fn capability_of(tool_name: &str) -> ToolCapability {
    TOOL_CAPABILITIES
        .iter()
        .find(|(name, _)| *name == tool_name)
        .map(|(_, cap)| *cap)
        .unwrap_or(ToolCapability::Other)
}

/// Argument holding the command line of a shell tool.
pub const SHELL_COMMAND_ARG: &str = "command";

/// Argument holding the path of a file-read tool.
pub const READ_PATH_ARG: &str = "file_path";

/// Path suffixes of reads approved without confirmation (case-sensitive).
pub const DOC_READ_EXTENSIONS: &[&str] = &[".md", ".mdx", ".txt", ".json"];

/// Returns true when `key` (any case) is in [`SENSITIVE_KEYS`].
pub fn is_sensitive_key(key: &str) -> bool {
    let lowered = key.to_lowercase();
    SENSITIVE_KEYS.contains(&lowered.as_str())
}

pub fn is_doc_read_path(path: &str) -> bool {
    DOC_READ_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Uncompiled command rule.
#[derive(Debug, Clone, Copy)]
pub struct CommandRuleDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// Shell command shapes that are blocked before the call runs.
///
/// Redacting the command is not enough for these: the secret leaves the
/// machine in the outgoing request itself. `.` crosses newlines so a command
/// split with `\` continuations still matches.
pub const COMMAND_BLOCK_RULES: &[CommandRuleDef] = &[CommandRuleDef {
    name: "auth-header-fetch",
    pattern: r"(?is)\b(curl|wget)\b.*\s(-H|--header)\s.*(authorization|api-key)",
    reason: hook::REASON_AUTH_HEADER_FETCH,
}];

/// A compiled command rule.
#[derive(Debug, Clone)]
pub struct CommandRule {
    pub name: &'static str,
    pub reason: &'static str,
    regex: Regex,
}

impl CommandRule {
    pub fn compile(def: &CommandRuleDef) -> Result<Self, HookError> {
        Ok(Self {
            name: def.name,
            reason: def.reason,
            regex: Regex::new(def.pattern)?,
        })
    }

    /// Compile [`COMMAND_BLOCK_RULES`] in table order.
    pub fn compile_block_rules() -> Result<Vec<Self>, HookError> {
        COMMAND_BLOCK_RULES.iter().map(Self::compile).collect()
    }

    pub fn matches(&self, command: &str) -> bool {
        self.regex.is_match(command)
    }
}
