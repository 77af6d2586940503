//! Error types for save file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing `.rawdata` files.
#[derive(Debug, Error)]
pub enum RawDataError {
    /// Save file not found.
    #[error("save file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Buffer length does not match the fixed layout.
    #[error("wrong save length: expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Magic header mismatch.
    #[error("invalid save file: bad signature")]
    BadSignature,

    /// Magic footer mismatch.
    #[error("invalid save file: bad ending marker")]
    BadEnding,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for save file operations.
pub type Result<T> = std::result::Result<T, RawDataError>;
