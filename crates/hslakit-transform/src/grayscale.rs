//! Grayscale conversion

use hslakit_core::Raster;

/// Convert a raster to grayscale.
///
/// Sets the saturation of every pixel to 0, removing all color. Hue,
/// luminance, and alpha are left unchanged. Applying the transform a
/// second time is a no-op.
pub fn grayscale(mut image: Raster) -> Raster {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if let Some(px) = image.pixel_mut(x, y) {
                px.s = 0.0;
            }
        }
    }
    image
}
