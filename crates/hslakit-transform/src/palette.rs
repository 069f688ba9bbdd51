//! Palette hue remapping
//!
//! Recolors every pixel to the nearer of a small fixed set of target
//! hues on the circular 360-degree hue scale. The shipped palette is
//! the two Illini colors, orange and blue.

use hslakit_core::Raster;

// ============================================================================
// Constants
// ============================================================================

/// Illini orange hue (degrees)
pub const ILLINI_ORANGE: f64 = 11.0;

/// Illini blue hue (degrees)
pub const ILLINI_BLUE: f64 = 216.0;

// The two target hues split the circle into unequal arcs, so the two
// decision boundaries are the bisectors of each arc, not a single
// midpoint: (11 + 216) / 2 and (216 + (360 + 11)) / 2 mod 360.

/// Bisector of the short arc [11, 216]
const BLUE_ARC_START: f64 = 113.5;

/// Bisector of the wrap-around arc [216, 360) ∪ [0, 11]
const BLUE_ARC_END: f64 = 293.5;

/// Angular distance between two hues on the 360-degree circle.
fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Select the palette hue circularly nearest to `hue`.
///
/// Distance ties resolve to the later palette entry. An empty palette
/// returns `hue` unchanged.
pub fn nearest_palette_hue(hue: f64, palette: &[f64]) -> f64 {
    let mut nearest = hue;
    let mut nearest_dist = f64::INFINITY;
    for &target in palette {
        let d = hue_distance(hue, target);
        if d <= nearest_dist {
            nearest = target;
            nearest_dist = d;
        }
    }
    nearest
}

/// Remap every pixel's hue to the circularly nearest entry of `palette`.
///
/// Saturation, luminance, and alpha are unchanged.
pub fn remap_to_palette(mut image: Raster, palette: &[f64]) -> Raster {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if let Some(px) = image.pixel_mut(x, y) {
                px.h = nearest_palette_hue(px.h, palette);
            }
        }
    }
    image
}

/// Remap every pixel's hue to Illini orange (11) or blue (216).
///
/// A hue in `[113.5, 293.5]` (both ends inclusive) maps to blue,
/// anything else to orange. The interval ends are the angular bisectors
/// of the two arcs between the target hues, so this is the same
/// partition as "circularly nearest of the two, ties to blue".
/// Saturation, luminance, and alpha are unchanged.
pub fn illinify(mut image: Raster) -> Raster {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if let Some(px) = image.pixel_mut(x, y) {
                px.h = if (BLUE_ARC_START..=BLUE_ARC_END).contains(&px.h) {
                    ILLINI_BLUE
                } else {
                    ILLINI_ORANGE
                };
            }
        }
    }
    image
}
