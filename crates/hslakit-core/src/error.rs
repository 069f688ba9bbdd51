//! Error types for hslakit-core
//!
//! Provides a unified error type for the core crate. The only failure
//! surface of the pixel container is coordinate bounds; everything else
//! in the core is total over well-formed rasters.

use thiserror::Error;

/// hslakit error type
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate outside the raster grid
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raster dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for hslakit operations
pub type Result<T> = std::result::Result<T, Error>;
