//! Unified error types for Picview
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for Picview operations
#[derive(Debug, thiserror::Error)]
pub enum PicviewError {
    /// I/O errors (directory enumeration, file reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode errors
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Path validation errors
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience Result type using PicviewError
pub type Result<T> = std::result::Result<T, PicviewError>;

impl PicviewError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
