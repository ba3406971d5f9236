//! Application configuration.
//!
//! The backend origin is baked in at build time from `DETECT_BACKEND_URL`
//! and falls back to the local detection service.

use detect_common::{BackendConfig, RetriggerPolicy, DEFAULT_BACKEND_URL};

/// Backend origin selected at build time.
pub const BACKEND_URL: &str = match option_env!("DETECT_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

/// File picker filter. Advisory only, the browser does not enforce it.
pub const ACCEPTED_TYPES: &str = "image/*";

/// Behavior of the submit button when pressed during an upload.
///
/// The button is disabled while loading, so this only matters for
/// programmatic triggers.
pub const RETRIGGER_POLICY: RetriggerPolicy = RetriggerPolicy::Ignore;

pub fn backend_config() -> BackendConfig {
    BackendConfig::new(BACKEND_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_targets_upload_endpoint() {
        assert!(backend_config().upload_url().ends_with("/upload"));
    }
}
