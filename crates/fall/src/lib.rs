#![deny(unsafe_code)]
//! Falling-confetti field effect.
//!
//! A field of independent particles falls from just above the top edge of a
//! surface: each particle drifts sideways on a slow sinusoid, spins, and is
//! culled the frame it leaves the bounds, while a small per-frame spawn
//! chance keeps the shower going. The field implements the
//! [`Effect`](confetti_core::Effect) trait, so one `tick` is one fully
//! deterministic, unit-testable frame.

mod field;
mod particle;

pub use field::{ConfettiFall, FallParams};
pub use particle::Particle;
