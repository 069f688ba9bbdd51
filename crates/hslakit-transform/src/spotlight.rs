//! Spotlight luminance falloff
//!
//! Darkens pixels by their Euclidean distance from a center point:
//! the further from the center, the darker, down to a fixed floor
//! beyond a cutoff radius.

use hslakit_core::Raster;

// ============================================================================
// Constants
// ============================================================================

/// Relative luminance reduction per unit of distance (0.5%)
const FALLOFF_PER_UNIT: f64 = 0.005;

/// Distance beyond which the floor applies
const CUTOFF_RADIUS: f64 = 160.0;

/// Luminance factor in the far field (an 80% reduction)
const FLOOR_FACTOR: f64 = 0.20;

/// Apply a spotlight centered at (`center_x`, `center_y`).
///
/// For each pixel at distance `d` from the center:
/// - `d == 0`: the pixel is left untouched.
/// - `d > 160`: luminance becomes `0.20 * l`.
/// - otherwise: luminance becomes `l - 0.005 * d * l`, evaluated against
///   the pixel's pre-transform luminance.
///
/// A pixel at exactly `d == 160` takes the linear branch; the cutoff
/// test is a strict greater-than, and that boundary routing is part of
/// the contract.
///
/// The center may lie outside the raster; distances are simply larger
/// and every pixel lands in the falloff or the floor.
pub fn spotlight(mut image: Raster, center_x: i64, center_y: i64) -> Raster {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let dx = (x as i64 - center_x) as f64;
            let dy = (y as i64 - center_y) as f64;
            let d = (dx * dx + dy * dy).sqrt();

            // The exact center pixel keeps its luminance
            if d == 0.0 {
                continue;
            }

            if let Some(px) = image.pixel_mut(x, y) {
                px.l = if d > CUTOFF_RADIUS {
                    FLOOR_FACTOR * px.l
                } else {
                    px.l - FALLOFF_PER_UNIT * d * px.l
                };
            }
        }
    }
    image
}
