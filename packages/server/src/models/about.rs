use serde::{Deserialize, Serialize};

use super::shared::required_text;
use crate::entity::about_me;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct UpdateAboutRequest {
    pub content: Option<String>,
}

impl UpdateAboutRequest {
    /// The trimmed content to store.
    pub fn validate(self) -> Result<String, AppError> {
        required_text(self.content, "content is required")
    }
}

/// Current content; empty when nothing has been saved yet.
#[derive(Serialize)]
pub struct AboutResponse {
    pub content: String,
}

#[derive(Serialize)]
pub struct AboutRecord {
    pub id: i32,
    pub content: String,
}

/// Body of a successful update: the newly stored row under `content`.
#[derive(Serialize)]
pub struct AboutUpdatedResponse {
    pub content: AboutRecord,
}

impl From<about_me::Model> for AboutRecord {
    fn from(model: about_me::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
        }
    }
}
