//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: effect error (unknown effect, tick failure, bad dimensions)
//! - 11: I/O error (file write, snapshot)
//! - 12: input error (bad palette, bad JSON params)
//! - 13: serialization error

use confetti_core::EffectError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// An effect-level error (unknown effect, tick failure, bad dimensions).
    Effect(EffectError),
    /// An I/O error (file write, snapshot rendering).
    Io(String),
    /// A user input error (bad palette name, bad JSON params).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Effect(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Effect(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<EffectError> for CliError {
    fn from(e: EffectError) -> Self {
        match e {
            EffectError::Io(msg) => CliError::Io(msg),
            other => CliError::Effect(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
