//! CPU raster implementation of [`Surface`].
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and headless tests share the same rasterization. Shapes are
//! filled by center-point sampling: each pixel inside the rotated shape's
//! bounding box is inverse-rotated into the particle's local frame and
//! tested against the shape's analytic inside predicate. No antialiasing;
//! colors are opaque and overwrite whatever was below.

use confetti_core::color::Srgb;
use confetti_core::error::EffectError;
use confetti_core::surface::{Shape, Surface};
use glam::DVec2;

/// An RGBA8 pixel buffer implementing [`Surface`].
///
/// `clear()` resets every pixel to fully transparent, matching the overlay
/// semantics of the browser canvas.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RasterSurface {
    /// Creates a transparent surface of the given pixel dimensions.
    ///
    /// Returns `EffectError::InvalidDimensions` if either dimension is zero
    /// or if the pixel buffer size would overflow `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EffectError> {
        if width == 0 || height == 0 {
            return Err(EffectError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(EffectError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Read-only access to the RGBA8 buffer, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA bytes of the pixel at `(x, y)`, or `None` when out
    /// of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Reallocates the buffer for new pixel dimensions and clears it.
    ///
    /// Returns `EffectError::InvalidDimensions` under the same rules as
    /// [`new`](RasterSurface::new).
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), EffectError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: Srgb) {
        let idx = (y * self.width + x) * 4;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
        self.data[idx + 3] = 255;
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn fill_shape(
        &mut self,
        shape: Shape,
        center: DVec2,
        rotation_degrees: f64,
        size: f64,
        color: Srgb,
    ) {
        if !size.is_finite() || size <= 0.0 || !center.is_finite() {
            return;
        }
        let (sin_t, cos_t) = rotation_degrees.to_radians().sin_cos();

        // Bounding radius: the square's and triangle's farthest vertex sits
        // at (size/2) * sqrt(2) from the center.
        let radius = size * 0.5 * std::f64::consts::SQRT_2;
        let min_x = (center.x - radius).floor();
        let max_x = (center.x + radius).ceil();
        let min_y = (center.y - radius).floor();
        let max_y = (center.y + radius).ceil();

        let w = self.width as f64;
        let h = self.height as f64;
        if max_x <= 0.0 || min_x >= w || max_y <= 0.0 || min_y >= h {
            return;
        }

        let x0 = min_x.max(0.0) as usize;
        let x1 = max_x.min(w) as usize;
        let y0 = min_y.max(0.0) as usize;
        let y1 = max_y.min(h) as usize;

        for py in y0..y1 {
            for px in x0..x1 {
                let d = DVec2::new(px as f64 + 0.5, py as f64 + 0.5) - center;
                // Inverse-rotate the pixel center into the shape's local frame.
                let local = DVec2::new(d.x * cos_t + d.y * sin_t, -d.x * sin_t + d.y * cos_t);
                if inside(shape, local, size) {
                    self.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Analytic inside test for a point in the shape's local frame.
fn inside(shape: Shape, local: DVec2, size: f64) -> bool {
    let half = size * 0.5;
    match shape {
        Shape::Square => local.x.abs() <= half && local.y.abs() <= half,
        Shape::Circle => local.length_squared() <= half * half,
        // Apex at (0, -half), base from (-half, half) to (half, half):
        // half-width grows linearly from 0 at the apex to `half` at the base.
        Shape::Triangle => {
            local.y >= -half && local.y <= half && local.x.abs() <= (local.y + half) * 0.5
        }
    }
}
