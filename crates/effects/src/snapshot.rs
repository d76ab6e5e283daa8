//! PNG snapshots of a [`RasterSurface`].
//!
//! Feature-gated behind `png` (default on) so that WASM builds can depend
//! on this crate without pulling in the `image` crate.

use std::path::Path;

use confetti_core::error::EffectError;

use crate::pixel::RasterSurface;

/// Writes a surface's current pixels as an RGBA PNG.
///
/// Returns `EffectError::InvalidDimensions` if the surface dimensions
/// overflow `u32`, or `EffectError::Io` on write failure.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), EffectError> {
    let (width, height) = surface.dimensions();
    let w = u32::try_from(width).map_err(|_| EffectError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EffectError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.data().to_vec())
        .ok_or_else(|| EffectError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EffectError::Io(e.to_string()))
}
