#![deny(unsafe_code)]
//! Core types and traits for the confetti engine.
//!
//! Provides the `Effect` trait, the `Surface` drawing abstraction and its
//! `Shape` vocabulary, the `Srgb` color type, discrete `Palette`s,
//! the `Xorshift64` PRNG, parameter helpers, and `EffectError`.

pub mod color;
pub mod effect;
pub mod error;
pub mod palette;
pub mod params;
pub mod prng;
pub mod surface;

pub use color::Srgb;
pub use effect::Effect;
pub use error::EffectError;
pub use palette::Palette;
pub use prng::Xorshift64;
pub use surface::{Shape, Surface};
