//! hslakit-transform - Per-pixel HSLA raster transforms
//!
//! Each transform makes one full pass over a raster's pixel grid,
//! rewriting each pixel independently of the others:
//!
//! - [`grayscale`] - drop all saturation
//! - [`spotlight`] - distance-based luminance falloff around a center
//! - [`illinify`] / [`remap_to_palette`] - snap hues to a fixed palette
//! - [`watermark`] / [`watermark_exact`] - luminance boost keyed by a
//!   second raster
//!
//! Every transform takes its raster by value and returns the same,
//! mutated raster; chaining is just function composition. All are total
//! over zero-sized rasters.

mod error;
mod grayscale;
pub mod palette;
mod spotlight;
mod watermark;

pub use error::{TransformError, TransformResult};
pub use grayscale::grayscale;
pub use palette::{ILLINI_BLUE, ILLINI_ORANGE, illinify, nearest_palette_hue, remap_to_palette};
pub use spotlight::spotlight;
pub use watermark::{watermark, watermark_exact};
