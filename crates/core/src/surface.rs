//! Drawing surface abstraction and the confetti shape vocabulary.
//!
//! An effect never talks to a platform canvas directly: it draws through the
//! object-safe [`Surface`] trait, so the same tick logic renders to a browser
//! canvas, a CPU raster buffer, or a recording test double.

use crate::color::Srgb;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The three confetti shapes, cycled through as a particle rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Square,
    Circle,
    Triangle,
}

impl Shape {
    /// Selects the shape rendered for a given rotation angle in degrees.
    ///
    /// The mapping is `floor(rotation) mod 3`: 0 → square, 1 → circle,
    /// 2 → triangle. `rem_euclid` keeps the selection total for negative
    /// angles (rotation speeds can be negative).
    pub fn from_rotation(rotation_degrees: f64) -> Shape {
        match (rotation_degrees.floor() as i64).rem_euclid(3) {
            0 => Shape::Square,
            1 => Shape::Circle,
            _ => Shape::Triangle,
        }
    }
}

/// A 2D drawing surface the animator repaints every frame.
///
/// All shapes are drawn in the particle's local coordinate frame: the
/// implementation translates to `center`, rotates by `rotation_degrees`
/// (converted to radians), then fills:
///
/// - `Square` — axis-aligned square of side `size` centered on the origin.
/// - `Circle` — filled circle of diameter `size` centered on the origin.
/// - `Triangle` — filled isoceles triangle inscribed in a box of side
///   `size`, apex at the top: vertices (0, −s/2), (−s/2, +s/2), (+s/2, +s/2).
///
/// This trait is **object-safe**: effects receive `&mut dyn Surface`.
pub trait Surface {
    /// Current surface width in pixels.
    fn width(&self) -> f64;

    /// Current surface height in pixels.
    fn height(&self) -> f64;

    /// Clears the entire surface.
    fn clear(&mut self);

    /// Fills one shape at `center` with the given rotation, size, and color.
    fn fill_shape(
        &mut self,
        shape: Shape,
        center: DVec2,
        rotation_degrees: f64,
        size: f64,
        color: Srgb,
    );
}
