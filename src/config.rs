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

use crate::engine_core::constants::config;
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse_safe(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// `tracing` filter directive, e.g. "warn" or "audit=info"
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var(config::ENV_LOG_LEVEL)
                .unwrap_or_else(|_| config::DEFAULT_LOG_LEVEL.to_string()),
            log_format: LogFormat::parse_safe(
                &env::var(config::ENV_LOG_FORMAT)
                    .unwrap_or_else(|_| config::DEFAULT_LOG_FORMAT.to_string()),
            ),
        }
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, log_level: Option<String>, log_format: Option<LogFormat>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}

impl Config {
    /// Log filter: `RUST_LOG` first, then the configured level, then the
    /// built-in default.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_or_default(&self.log_level))
    }
}

fn filter_or_default(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: config::DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}
