use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// File extensions kept as-is; anything else is stored as `jpg`.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];
pub const FALLBACK_EXTENSION: &str = "jpg";

#[derive(Deserialize)]
pub struct UploadImageRequest {
    /// Base64 payload, bare or as a `data:<mime>;base64,` URL.
    pub image: Option<String>,
    pub content_type: Option<String>,
}

/// A decoded upload ready for the object store.
#[derive(Debug, PartialEq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl UploadImageRequest {
    pub fn decode(self) -> Result<DecodedImage, AppError> {
        let image = self
            .image
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Validation("image is required".into()))?;

        let (data_url_type, payload) = split_data_url(&image);

        // MIME-style payloads wrap lines; the alphabet has no whitespace.
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| AppError::Validation("image is not valid base64".into()))?;

        let content_type = self
            .content_type
            .filter(|s| !s.trim().is_empty())
            .or(data_url_type)
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(DecodedImage {
            bytes,
            content_type,
        })
    }
}

/// Split `data:image/png;base64,AAAA` into its media type and payload.
/// Input that is not a base64 data URL is returned unchanged as the payload.
fn split_data_url(image: &str) -> (Option<String>, &str) {
    let Some(rest) = image.strip_prefix("data:") else {
        return (None, image);
    };
    match rest.split_once(";base64,") {
        Some((media_type, payload)) if !media_type.is_empty() => {
            (Some(media_type.to_string()), payload)
        }
        Some((_, payload)) => (None, payload),
        None => (None, image),
    }
}

/// Extension for a stored object: the part of `content_type` after its last `/`
/// when allow-listed, otherwise the fallback.
pub fn file_extension(content_type: &str) -> &'static str {
    let subtype = content_type.rsplit('/').next().unwrap_or_default();
    ALLOWED_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| *ext == subtype)
        .unwrap_or(FALLBACK_EXTENSION)
}

/// A fresh, collision-free object key for an upload.
pub fn object_key(content_type: &str) -> String {
    format!("{}.{}", uuid::Uuid::new_v4(), file_extension(content_type))
}

#[derive(Serialize)]
pub struct UploadImageResponse {
    pub url: String,
}
