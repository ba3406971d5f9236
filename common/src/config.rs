//! Client configuration.
//!
//! The backend origin is the only deployment-specific value. It defaults to
//! the local detection service and can be overridden through
//! [`BACKEND_URL_ENV`] (at compile time for the browser build, at run time
//! for the CLI).

/// Default backend origin (the detection service listens on port 8000).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend origin.
pub const BACKEND_URL_ENV: &str = "DETECT_BACKEND_URL";

/// Path of the detection endpoint on the backend origin.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field carrying the image bytes.
pub const FILE_FIELD: &str = "file";

/// Prefix turning the backend's base64 payload into an image source.
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Shown when the upload is triggered before any file was picked.
pub const NO_FILE_MESSAGE: &str = "Please select an image first!";

/// Prefix of every user-visible upload failure.
pub const ERROR_PREFIX: &str = "Error uploading image: ";

/// Where uploads are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Build a config for `base_url`. Trailing slashes are dropped so the
    /// endpoint path can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BACKEND_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the detection endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// What a second upload trigger does while a request is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetriggerPolicy {
    /// Drop the new trigger; the pending request settles normally.
    #[default]
    Ignore,
    /// Cancel the pending request and start a fresh one.
    CancelPrevious,
}
