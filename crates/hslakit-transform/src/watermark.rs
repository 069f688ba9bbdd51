//! Luminance-keyed watermarking
//!
//! Reads a stencil raster to decide which pixels of a base raster get a
//! flat luminance boost. The stencil is read-only; only the base is
//! written, always at the same coordinate that was read.

use crate::{TransformError, TransformResult};
use hslakit_core::{Error, Raster};

/// Luminance added to base pixels under a fully lit stencil pixel
const BOOST: f64 = 0.2;

/// Apply `stencil` as a watermark over `base`.
///
/// For every coordinate where the stencil pixel's luminance is exactly
/// 1.0, the base pixel's luminance is increased by 0.2. The result is
/// not clamped, so luminance may exceed 1.0. All other base pixels are
/// untouched.
///
/// When the rasters differ in size, only the overlapping region
/// (minimum width by minimum height) is considered. Use
/// [`watermark_exact`] to reject mismatched sizes instead.
pub fn watermark(mut base: Raster, stencil: &Raster) -> Raster {
    let width = base.width().min(stencil.width());
    let height = base.height().min(stencil.height());

    for y in 0..height {
        for x in 0..width {
            let lit = stencil.pixel(x, y).is_some_and(|px| px.l == 1.0);
            if lit {
                if let Some(px) = base.pixel_mut(x, y) {
                    px.l += BOOST;
                }
            }
        }
    }
    base
}

/// Apply `stencil` as a watermark over `base`, requiring equal sizes.
///
/// # Errors
///
/// Returns a [`DimensionMismatch`](hslakit_core::Error::DimensionMismatch)
/// error when the two rasters differ in width or height.
pub fn watermark_exact(base: Raster, stencil: &Raster) -> TransformResult<Raster> {
    if !base.sizes_equal(stencil) {
        return Err(TransformError::Core(Error::DimensionMismatch {
            expected: (base.width(), base.height()),
            actual: (stencil.width(), stencil.height()),
        }));
    }
    Ok(watermark(base, stencil))
}
