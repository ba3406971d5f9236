//! Error types for the upload cycle.
//!
//! Every failure is caught at the orchestrator boundary and turned into a
//! single user-visible string by [`UploadError::user_message`]. Nothing here
//! propagates past the UI.

use thiserror::Error;

use crate::config::{ERROR_PREFIX, NO_FILE_MESSAGE};

/// Errors that can end an upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Upload triggered with no file picked. Raised before any network activity.
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// Backend answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// Backend answered successfully but reported an error in the payload.
    #[error("{0}")]
    Backend(String),

    /// Body was not valid JSON or lacked the expected fields.
    #[error("{0}")]
    Decode(String),

    /// Request could not complete (DNS, refused connection, aborted transfer).
    #[error("{0}")]
    Network(String),

    /// Selected file could not be read.
    #[error("{0}")]
    File(String),

    /// Request was superseded by a newer one.
    #[error("Request cancelled")]
    Cancelled,
}

impl UploadError {
    /// Text shown in the error region.
    ///
    /// The precondition failure is shown as-is; every other kind carries the
    /// upload prefix followed by the underlying description.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            other => format!("{}{}", ERROR_PREFIX, other),
        }
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Decode(err.to_string())
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
