//! HTTP upload of the selected image to the detection backend.

use detect_common::{BackendReply, DetectionBackend, UploadError, UploadResult, FILE_FIELD};
use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};

/// Posts images through the browser's `fetch`.
pub struct GlooBackend {
    upload_url: String,
    abort: Option<AbortSignal>,
}

impl GlooBackend {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self { upload_url: upload_url.into(), abort: None }
    }

    /// Abort the request when `signal` fires.
    pub fn with_abort_signal(mut self, signal: AbortSignal) -> Self {
        self.abort = Some(signal);
        self
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

impl DetectionBackend for GlooBackend {
    type File = File;

    async fn post_image(&self, file: &File) -> UploadResult<BackendReply> {
        // FormData with the image under "file"
        let form_data = FormData::new()
            .map_err(|e| UploadError::File(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob(FILE_FIELD, file)
            .map_err(|e| UploadError::File(format!("Failed to append file: {:?}", e)))?;

        log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), self.upload_url);

        let request = Request::post(&self.upload_url)
            .header("Accept", "application/json")
            .abort_signal(self.abort.as_ref())
            .body(form_data)
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            if self.abort.as_ref().is_some_and(AbortSignal::aborted) {
                UploadError::Cancelled
            } else {
                UploadError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        Ok(BackendReply::new(status, body))
    }
}
