//! I/O error types
//!
//! A single error type for PNG decode/encode. The underlying `png`
//! library errors are mapped into string-carrying variants so callers
//! only handle one type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image data in a layout this library does not handle
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] hslakit_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
