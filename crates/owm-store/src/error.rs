//! Error types for the save store and configuration.

use std::path::PathBuf;
use thiserror::Error;

use owm_rawdata::RawDataError;

/// Errors from store and configuration operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying codec failure (bad frame, missing file).
    #[error(transparent)]
    Codec(#[from] RawDataError),

    /// Configuration file could not be parsed.
    #[error("invalid configuration at {path}: {source}")]
    InvalidConfiguration {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Save file name is not one the store produces.
    #[error("not a save file name: {name}")]
    InvalidFileName { name: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
