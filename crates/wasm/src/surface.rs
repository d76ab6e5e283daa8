//! [`Surface`] implementation over a browser 2D canvas context.

use confetti_core::color::Srgb;
use confetti_core::surface::{Shape, Surface};
use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

/// A drawing surface backed by a `CanvasRenderingContext2d`.
///
/// Width and height mirror the canvas's pixel dimensions and are kept in
/// sync by the resize listener; the context itself carries no queryable
/// size.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wraps a 2D context with the given pixel dimensions.
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Updates the recorded pixel dimensions after a canvas resize.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_shape(
        &mut self,
        shape: Shape,
        center: DVec2,
        rotation_degrees: f64,
        size: f64,
        color: Srgb,
    ) {
        let half = size * 0.5;
        self.ctx.save();
        // Transform errors are swallowed: a failed frame is invisible, not
        // fatal, and must never take the page down with it.
        let _ = self.ctx.translate(center.x, center.y);
        let _ = self.ctx.rotate(rotation_degrees.to_radians());
        self.ctx.set_fill_style_str(&color.to_hex());
        match shape {
            Shape::Square => {
                self.ctx.fill_rect(-half, -half, size, size);
            }
            Shape::Circle => {
                self.ctx.begin_path();
                let _ = self
                    .ctx
                    .arc(0.0, 0.0, half, 0.0, std::f64::consts::TAU);
                self.ctx.fill();
            }
            Shape::Triangle => {
                self.ctx.begin_path();
                self.ctx.move_to(0.0, -half);
                self.ctx.line_to(-half, half);
                self.ctx.line_to(half, half);
                self.ctx.close_path();
                self.ctx.fill();
            }
        }
        self.ctx.restore();
    }
}
