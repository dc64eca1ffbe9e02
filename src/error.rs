//! Error types for the icon generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting assets
///
/// Font loading is deliberately absent: a face that cannot be loaded is
/// replaced by the built-in face instead of surfacing an error.
#[derive(Error, Debug)]
pub enum Error {
    /// File system failure (missing output directory, unwritable file, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A zero-sized canvas or export target was requested
    #[error("Invalid size: {0}x{0}")]
    InvalidSize(u32),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Manifest serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
