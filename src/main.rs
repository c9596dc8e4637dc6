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

// Main entry point for the redact-hook filters
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::debug;

use redact_hook::config::{Config, LogFormat};
use redact_hook::engine_core::constants::exit;
use redact_hook::hook::pipeline::{self, HookEvent};
use redact_hook::hook::transport::StdioTransport;

#[derive(Parser, Debug)]
#[command(name = "redact-hook", version, about, long_about = None)]
struct Cli {
    /// Tracing filter directive (overrides REDACT_HOOK_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (overrides REDACT_HOOK_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    hook: HookCommand,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum HookCommand {
    /// Evaluate a proposed tool call read from stdin
    PreToolUse,
    /// Sanitize a completed tool result read from stdin
    PostToolUse,
}

impl From<HookCommand> for HookEvent {
    fn from(cmd: HookCommand) -> Self {
        match cmd {
            HookCommand::PreToolUse => HookEvent::PreToolUse,
            HookCommand::PostToolUse => HookEvent::PostToolUse,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // clap exits with 2 on usage errors, which the orchestrator reads as a block.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit::INPUT_ERROR);
        }
    };

    install_panic_hook();

    let config = Config::from_env().with_overrides(cli.log_level.clone(), cli.log_format);
    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to init tracing: {}", e);
    }

    match run(cli.hook.into()).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(exit::INPUT_ERROR)
        }
    }
}

async fn run(event: HookEvent) -> anyhow::Result<u8> {
    let mut transport = StdioTransport::new();
    let raw = transport
        .read_document()
        .await
        .context("Failed to read hook input")?;

    let response = pipeline::run(event, &raw);
    debug!(hook = event.name(), exit_code = response.exit_code, "Hook finished");

    transport
        .write_response(&response)
        .await
        .context("Failed to write hook output")?;
    Ok(response.exit_code)
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("PANIC: {} at {}", message, location);
    }));
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::fmt;

    // stdout carries the hook document, so logs always go to stderr.
    let subscriber = fmt()
        .with_env_filter(config.env_filter())
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => subscriber.json().try_init()?,
        LogFormat::Text => subscriber.try_init()?,
    }

    Ok(())
}
