//! Writing the annotated image back to disk.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use detect_common::IMAGE_DATA_URI_PREFIX;

use crate::error::{CliError, CliResult};

/// `<dir>/<stem>.detected.jpg` next to the input image.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}.detected.jpg", stem))
}

/// Decode a `data:image/jpeg;base64,...` URI into JPEG bytes.
pub fn decode_data_uri(data_uri: &str) -> CliResult<Vec<u8>> {
    let payload = data_uri.strip_prefix(IMAGE_DATA_URI_PREFIX).ok_or_else(|| {
        CliError::InvalidImage("not a base64 JPEG data URI".to_string())
    })?;
    Ok(STANDARD.decode(payload.trim())?)
}

/// Decode `data_uri` and write it to `path`.
pub async fn write_result(data_uri: &str, path: &Path) -> CliResult<()> {
    let bytes = decode_data_uri(data_uri)?;
    tokio::fs::write(path, &bytes).await?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
