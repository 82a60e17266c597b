//! Error types for the drive-ls crate.

use thiserror::Error;

/// Errors that can occur when listing and rendering Drive files.
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to resolve path for '{name}': {reason}")]
    PathResolution { name: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to write delimited output: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for DriveError.
pub type Result<T> = std::result::Result<T, DriveError>;
