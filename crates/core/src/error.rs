//! Error types for the confetti engine core.

use thiserror::Error;

/// Errors produced by effect operations.
#[derive(Debug, Error)]
pub enum EffectError {
    /// Width or height was zero, negative, or non-finite when creating a
    /// field or drawing surface.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A palette name was not recognized by the built-in registry.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// An effect name was not recognized by the registry.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
