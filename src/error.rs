//! Error types for chart-raster operations.
//!
//! Drawing never fails: geometry outside the surface is clipped. Errors are
//! reserved for contract violations when a surface is built and for output
//! encoding.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chart-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a surface or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer shorter than `width * height * 4` bytes.
    #[error("Buffer too small: {required} bytes required, {actual} provided")]
    BufferTooSmall {
        /// Bytes needed for the declared dimensions.
        required: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },
}
