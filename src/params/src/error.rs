// params/src/error.rs

//! Error types for parameter-set accumulation and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parameter-set operations.
pub type Result<T> = std::result::Result<T, ParamsError>;

/// Errors that can occur when writing parameter sets to disk.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// I/O error when writing a properties file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The target directory does not exist. Writes never create parent
    /// directories; the caller owns the output directory.
    #[error("output directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}
