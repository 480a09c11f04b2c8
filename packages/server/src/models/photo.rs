use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::required_text;
use crate::entity::profile_photo;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct AddPhotoRequest {
    pub photo_url: Option<String>,
}

impl AddPhotoRequest {
    pub fn validate(self) -> Result<String, AppError> {
        required_text(self.photo_url, "photo_url is required")
    }
}

/// Parse the `id` query parameter of a delete request.
pub fn parse_photo_id(raw: Option<&str>) -> Result<i32, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("id is required".into()))?;
    raw.parse()
        .map_err(|_| AppError::Validation("id must be an integer".into()))
}

#[derive(Serialize)]
pub struct PhotoResponse {
    pub id: i32,
    pub photo_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoResponse>,
}

#[derive(Serialize)]
pub struct PhotoCreatedResponse {
    pub photo: PhotoResponse,
}

impl From<profile_photo::Model> for PhotoResponse {
    fn from(model: profile_photo::Model) -> Self {
        Self {
            id: model.id,
            photo_url: model.photo_url,
            display_order: model.display_order,
            created_at: model.created_at,
        }
    }
}
