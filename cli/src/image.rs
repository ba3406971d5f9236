//! Image files read from disk for upload.

use std::path::Path;

use crate::error::CliResult;

/// An image loaded into memory, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: Option<&'static str>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Read `path` into memory. The content is not checked.
    pub async fn open(path: &Path) -> CliResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            content_type: guess_content_type(path),
            name,
            bytes,
        })
    }
}

/// MIME type from the file extension, as a browser file picker would report it.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}
