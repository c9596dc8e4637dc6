// Domain error types. A policy block is a decision and never appears here.

use crate::engine_core::constants::exit;
use thiserror::Error;

/// Main error type for the hook
#[derive(Error, Debug)]
pub enum HookError {
    /// Top-level input is not a JSON value (exit 1)
    #[error("Invalid JSON: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// Top-level input nests deeper than the accepted limit (exit 1)
    #[error("Invalid JSON: nesting deeper than {0} levels")]
    TooDeep(usize),

    /// A built-in pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The hook document could not be serialized
    #[error("Failed to encode hook output: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O Error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Exit code reported to the orchestrator for this error.
    ///
    /// Every error maps to the "malformed input / internal error" code, so an
    /// error can never be mistaken for a block.
    pub fn exit_code(&self) -> u8 {
        match self {
            HookError::InvalidInput(_)
            | HookError::TooDeep(_)
            | HookError::Pattern(_)
            | HookError::Encode(_)
            | HookError::Io(_) => exit::INPUT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_is_prefixed() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let msg = HookError::InvalidInput(err).to_string();
        assert!(msg.starts_with("Invalid JSON: "), "{msg}");
        let msg = HookError::TooDeep(1000).to_string();
        assert!(msg.starts_with("Invalid JSON: "), "{msg}");
    }

    #[test]
    fn errors_never_use_block_exit_code() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(HookError::InvalidInput(err).exit_code(), exit::INPUT_ERROR);
        let io = std::io::Error::other("closed");
        assert_ne!(HookError::Io(io).exit_code(), exit::BLOCK);
    }
}
