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

//! redact-hook: secret redaction for agent tool calls.
//!
//! This library provides the engine behind the `redact-hook` binary: a
//! pre-call guard that blocks credential-leaking commands and auto-approves
//! documentation reads, and a post-call filter that scrubs secrets from tool
//! output. Both share one redaction engine over JSON values.

pub mod config;
pub mod engine;
pub mod engine_core;
pub mod hook;

pub use engine::filter::PostCallFilter;
pub use engine::guard::PreCallGuard;
pub use engine::redactor::{RedactionProfile, Redactor};
pub use engine_core::errors::HookError;
pub use engine_core::models::Decision;
