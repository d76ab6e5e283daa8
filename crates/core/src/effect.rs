//! The core `Effect` trait that every decorative animation must implement.
//!
//! The trait replaces self-rescheduling frame callbacks with an explicit
//! lifecycle: `start` seeds state, `tick` advances and draws exactly one
//! frame, `stop` halts. `tick` is the unit frontends schedule — against a
//! display-synchronized callback in the browser, a plain loop in the CLI,
//! or manual invocation in tests — so no real frame clock appears anywhere
//! in effect logic.

use crate::error::EffectError;
use crate::surface::Surface;
use serde_json::Value;

/// Core trait for decorative frame-based effects.
///
/// This trait is **object-safe**: you can use `Box<dyn Effect>` or
/// `&mut dyn Effect` for runtime switching between effects.
pub trait Effect {
    /// Seeds the effect's state and marks it running.
    ///
    /// Calling `start` again replaces any previous state with a fresh seed;
    /// it never accumulates.
    fn start(&mut self);

    /// Marks the effect stopped. Idempotent, and callable before any `start`.
    ///
    /// The surface keeps whatever the last `tick` drew; `stop` never clears.
    fn stop(&mut self);

    /// Returns whether the effect is between a `start` and a `stop`.
    ///
    /// Advisory for schedulers; `tick` itself does not consult it.
    fn is_running(&self) -> bool;

    /// Advances the effect by exactly one frame and draws it.
    fn tick(&mut self, surface: &mut dyn Surface) -> Result<(), EffectError>;

    /// Updates the effect's bounds after its host surface was resized.
    ///
    /// Only dimensions change; live state is never repositioned.
    fn resize(&mut self, width: f64, height: f64);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
