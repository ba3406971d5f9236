//! Transport seam between the upload orchestrator and the network.
//!
//! The browser build posts through `gloo-net`, the CLI through `reqwest`.
//! Both only move bytes; interpreting the reply is [`detect`]'s job so the
//! mapping is identical everywhere.

use crate::error::UploadResult;
use crate::types::BackendReply;

/// Something that can post one image to the detection endpoint.
///
/// Implementations must send a multipart body with a single
/// [`crate::FILE_FIELD`] part holding the raw file bytes, plus an
/// `Accept: application/json` header, and return the status and body
/// untouched. Transport failures map to [`crate::UploadError::Network`].
#[allow(async_fn_in_trait)]
pub trait DetectionBackend {
    /// Platform file handle.
    type File;

    async fn post_image(&self, file: &Self::File) -> UploadResult<BackendReply>;
}

/// Post `file` and map the reply onto a data URI.
pub async fn detect<B: DetectionBackend>(backend: &B, file: &B::File) -> UploadResult<String> {
    let reply = backend.post_image(file).await?;
    log::debug!("Response received: {}", reply.status);

    let data_uri = reply.into_data_uri()?;
    log::debug!("Detection image received ({} chars)", data_uri.len());
    Ok(data_uri)
}
