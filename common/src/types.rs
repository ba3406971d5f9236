//! Wire types for the detection endpoint.
//!
//! The backend answers `POST /upload` with either `{ "image": "<base64>" }`
//! or `{ "error": "<message>" }`. The status code is checked before the body
//! is looked at.

use serde::{Deserialize, Serialize};

use crate::config::IMAGE_DATA_URI_PREFIX;
use crate::error::{UploadError, UploadResult};

/// JSON body returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectResponse {
    /// Annotated image, base64-encoded JPEG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Failure reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectResponse {
    /// Map the body onto a data URI, or the error it carries.
    pub fn into_data_uri(self) -> UploadResult<String> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Err(UploadError::Backend(message));
        }

        match self.image {
            Some(image) => Ok(format!("{}{}", IMAGE_DATA_URI_PREFIX, image)),
            None => Err(UploadError::Decode(
                "response is missing the image field".to_string(),
            )),
        }
    }
}

/// Raw reply from a [`crate::DetectionBackend`], before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: String,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xx, as `Response.ok` defines it.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Apply the response mapping: status first, then the error field,
    /// then the image field.
    pub fn into_data_uri(self) -> UploadResult<String> {
        if !self.is_success() {
            return Err(UploadError::Http(self.status));
        }

        let response: DetectResponse = serde_json::from_str(&self.body)?;
        response.into_data_uri()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_becomes_data_uri() {
        let reply = BackendReply::new(200, r#"{"image": "Zm9v"}"#);
        assert_eq!(reply.into_data_uri().unwrap(), "data:image/jpeg;base64,Zm9v");
    }

    #[test]
    fn test_error_field_wins_over_image() {
        let reply = BackendReply::new(
            200,
            r#"{"image": "Zm9v", "error": "Failed to decode image"}"#,
        );
        assert_eq!(
            reply.into_data_uri(),
            Err(UploadError::Backend("Failed to decode image".into()))
        );
    }

    #[test]
    fn test_empty_error_field_is_ignored() {
        let reply = BackendReply::new(200, r#"{"image": "YmFy", "error": ""}"#);
        assert_eq!(reply.into_data_uri().unwrap(), "data:image/jpeg;base64,YmFy");
    }

    #[test]
    fn test_status_checked_before_body() {
        // The body would decode fine, but the status alone decides.
        let reply = BackendReply::new(500, r#"{"error": "boom"}"#);
        assert_eq!(reply.into_data_uri(), Err(UploadError::Http(500)));

        let reply = BackendReply::new(302, "");
        assert_eq!(reply.into_data_uri(), Err(UploadError::Http(302)));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let reply = BackendReply::new(200, "<html>oops</html>");
        assert!(matches!(reply.into_data_uri(), Err(UploadError::Decode(_))));
    }

    #[test]
    fn test_missing_image_is_decode_error() {
        let reply = BackendReply::new(200, "{}");
        assert!(matches!(reply.into_data_uri(), Err(UploadError::Decode(_))));
    }

    #[test]
    fn test_response_serialization_skips_absent_fields() {
        let body = DetectResponse { image: Some("Zm9v".into()), error: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"image":"Zm9v"}"#);
    }
}
