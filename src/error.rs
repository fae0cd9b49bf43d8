//! Error types for the fluid asset mesher.

use thiserror::Error;

/// Result type alias using MesherError.
pub type Result<T> = std::result::Result<T, MesherError>;

/// Main error type for fluid asset generation.
#[derive(Error, Debug)]
pub enum MesherError {
    /// Failed to serialize JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected before generation started.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
