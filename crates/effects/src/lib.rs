#![deny(unsafe_code)]
//! Effect registry: maps effect names to implementations and provides
//! CPU-side frame rendering.
//!
//! This crate sits between `confetti-core` (which defines the `Effect`
//! trait) and the effect crates (`confetti-fall`). Both the CLI and the
//! browser bindings can depend on this crate to avoid duplicating
//! dispatch logic.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use confetti_core::error::EffectError;
use confetti_core::palette::Palette;
use confetti_core::surface::Surface;
use confetti_core::Effect;
use serde_json::Value;

/// All available effect names.
const EFFECT_NAMES: &[&str] = &["confetti"];

/// Enumeration of all available decorative effects.
///
/// Wraps each effect implementation and delegates `Effect` trait methods.
/// Use [`EffectKind::from_name`] for string-based construction (CLI, WASM).
pub enum EffectKind {
    /// Falling confetti shower.
    Confetti(confetti_fall::ConfettiFall),
}

impl EffectKind {
    /// Constructs an effect by name.
    ///
    /// Returns `EffectError::UnknownEffect` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: f64,
        height: f64,
        seed: u64,
        palette: Palette,
        params: &Value,
    ) -> Result<Self, EffectError> {
        match name {
            "confetti" => Ok(EffectKind::Confetti(confetti_fall::ConfettiFall::from_json(
                width, height, seed, palette, params,
            )?)),
            _ => Err(EffectError::UnknownEffect(name.to_string())),
        }
    }

    /// Returns a slice of all recognized effect names.
    pub fn list_effects() -> &'static [&'static str] {
        EFFECT_NAMES
    }
}

impl Effect for EffectKind {
    fn start(&mut self) {
        match self {
            EffectKind::Confetti(e) => e.start(),
        }
    }

    fn stop(&mut self) {
        match self {
            EffectKind::Confetti(e) => e.stop(),
        }
    }

    fn is_running(&self) -> bool {
        match self {
            EffectKind::Confetti(e) => e.is_running(),
        }
    }

    fn tick(&mut self, surface: &mut dyn Surface) -> Result<(), EffectError> {
        match self {
            EffectKind::Confetti(e) => e.tick(surface),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        match self {
            EffectKind::Confetti(e) => e.resize(width, height),
        }
    }

    fn params(&self) -> Value {
        match self {
            EffectKind::Confetti(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EffectKind::Confetti(e) => e.param_schema(),
        }
    }
}
