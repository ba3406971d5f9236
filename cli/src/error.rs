//! Error types for the detect CLI.
//!
//! Upload failures arrive here already rendered as the user-facing string
//! built by [`detect_common::UploadError::user_message`].

use thiserror::Error;

/// Errors returned by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload ended with an error message.
    #[error("{0}")]
    Upload(String),

    /// Backend image could not be turned back into JPEG bytes.
    #[error("Invalid result image: {0}")]
    InvalidImage(String),
}

impl From<base64::DecodeError> for CliError {
    fn from(err: base64::DecodeError) -> Self {
        CliError::InvalidImage(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
