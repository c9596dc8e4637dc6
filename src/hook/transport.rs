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

//! Stdio transport for hook documents.
//!
//! One document in on stdin (read to EOF), one document out on stdout, and an
//! optional diagnostic line on stderr.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, Stderr, Stdin, Stdout};
use tracing::debug;

use crate::engine_core::errors::HookError;
use crate::hook::pipeline::HookResponse;

pub struct StdioTransport {
    reader: Stdin,
    writer: Stdout,
    diagnostics: Stderr,
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: tokio::io::stdin(),
            writer: tokio::io::stdout(),
            diagnostics: tokio::io::stderr(),
        }
    }

    /// Read the whole input document. Parsing is left to the pipeline so a
    /// malformed document maps to the input-error exit code.
    pub async fn read_document(&mut self) -> Result<Vec<u8>, HookError> {
        read_all(&mut self.reader).await
    }

    /// Write the response streams. The exit code is the caller's job.
    pub async fn write_response(&mut self, response: &HookResponse) -> Result<(), HookError> {
        if let Some(doc) = &response.stdout {
            write_line(&mut self.writer, doc).await?;
        }
        if let Some(message) = &response.stderr {
            write_line(&mut self.diagnostics, message).await?;
        }
        Ok(())
    }
}

async fn read_all<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Vec<u8>, HookError> {
    let mut buf = Vec::new();
    let bytes_read = reader.read_to_end(&mut buf).await?;
    debug!(bytes = bytes_read, "Received hook input");
    Ok(buf)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<(), HookError> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
