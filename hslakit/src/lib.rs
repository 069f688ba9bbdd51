//! hslakit - HSLA raster transforms
//!
//! A small image transform library over a hue/saturation/luminance/alpha
//! pixel model:
//!
//! - Grayscale conversion
//! - Spotlight (distance-based luminance falloff)
//! - Palette hue remapping (Illini orange/blue, or any hue palette)
//! - Watermarking keyed by a stencil raster's luminance
//!
//! # Example
//!
//! ```no_run
//! use hslakit::io;
//! use hslakit::transform::{grayscale, spotlight};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raster = io::read_image("alma.png")?;
//! let raster = spotlight(grayscale(raster), 320, 240);
//! io::write_image(&raster, "out.png")?;
//! # Ok(())
//! # }
//! ```

// Re-export core types (the pixel model used everywhere)
pub use hslakit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use hslakit_io as io;
pub use hslakit_transform as transform;
