//! `reqwest` transport for the detection endpoint.

use std::error::Error as _;

use detect_common::{
    BackendConfig, BackendReply, DetectionBackend, UploadError, UploadResult, FILE_FIELD,
};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};

use crate::image::ImageFile;

/// Posts images with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    upload_url: String,
}

impl ReqwestBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: config.upload_url(),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

impl DetectionBackend for ReqwestBackend {
    type File = ImageFile;

    async fn post_image(&self, file: &ImageFile) -> UploadResult<BackendReply> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if let Some(mime) = file.content_type {
            part = part
                .mime_str(mime)
                .map_err(|e| UploadError::File(e.to_string()))?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        log::info!(
            "📤 Uploading {} ({} bytes) to {}",
            file.name,
            file.bytes.len(),
            self.upload_url
        );

        let response = self
            .client
            .post(&self.upload_url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(describe(&e)))?;

        Ok(BackendReply::new(status, body))
    }
}

/// Error message followed by its source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
