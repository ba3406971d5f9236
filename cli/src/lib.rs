//! # detect-cli - Command-line client for the YOLO detection backend
//!
//! Sends one image to the backend's `/upload` endpoint through the same
//! upload state and response mapping the browser UI uses, and writes the
//! annotated JPEG it returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use detect_cli::run_upload;
//! use detect_common::BackendConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let saved = run_upload(&BackendConfig::default(), "cat.jpg".as_ref(), None).await.unwrap();
//!     println!("Annotated image: {}", saved.display());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - CLI error type
//! - [`image`] - Reading images from disk
//! - [`client`] - `reqwest` transport
//! - [`output`] - Decoding and saving the result image

use std::path::{Path, PathBuf};

use detect_common::{BackendConfig, RetriggerPolicy, UploadState};

pub mod error;
pub mod image;
pub mod client;
pub mod output;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CliError, CliResult};
pub use image::{guess_content_type, ImageFile};
pub use client::ReqwestBackend;
pub use output::{decode_data_uri, default_output_path, write_result};

/// Select `input` and upload it, returning the settled state.
pub async fn detect_file(
    config: &BackendConfig,
    input: &Path,
) -> CliResult<UploadState<ImageFile>> {
    let image = ImageFile::open(input).await?;

    let mut state = UploadState::new();
    state.select([image]);

    let backend = ReqwestBackend::new(config);
    state.upload(&backend, RetriggerPolicy::Ignore).await;

    Ok(state)
}

/// Upload `input` and save the annotated image.
///
/// Writes to `output`, or next to the input when `None`, and returns the
/// path written.
pub async fn run_upload(
    config: &BackendConfig,
    input: &Path,
    output: Option<&Path>,
) -> CliResult<PathBuf> {
    let state = detect_file(config, input).await?;

    if let Some(error) = state.error() {
        return Err(CliError::Upload(error.to_string()));
    }
    let data_uri = state
        .result()
        .ok_or_else(|| CliError::Upload("no result received".to_string()))?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    write_result(data_uri, &path).await?;

    Ok(path)
}
