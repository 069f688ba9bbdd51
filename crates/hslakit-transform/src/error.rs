//! Error types for hslakit-transform

use thiserror::Error;

/// Errors that can occur during raster transforms
///
/// The transforms themselves are total over any well-formed raster; the
/// only failure surface is the strict two-raster dimension check.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hslakit_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
