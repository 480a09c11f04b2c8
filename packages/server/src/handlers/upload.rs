use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use tracing::{info, instrument};

use crate::cors;
use crate::error::AppError;
use crate::event::{HttpEvent, HttpResponse};
use crate::models::upload::*;
use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
const DEFAULT_METHOD: &str = "POST";

pub fn upload_body_limit(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

/// `POST {image, content_type?}` stores a base64 image in the object store and
/// returns its public URL. One attempt is made; store failures surface as 500.
#[instrument(name = "upload_image", skip_all, fields(method = event.method_or(DEFAULT_METHOD)))]
pub async fn handle(state: &AppState, event: HttpEvent) -> HttpResponse {
    dispatch(state, &event)
        .await
        .unwrap_or_else(HttpResponse::from)
}

/// Axum entry point.
pub async fn serve(State(state): State<AppState>, event: HttpEvent) -> HttpResponse {
    handle(&state, event).await
}

async fn dispatch(state: &AppState, event: &HttpEvent) -> Result<HttpResponse, AppError> {
    match event.method_or(DEFAULT_METHOD) {
        "OPTIONS" => Ok(cors::preflight(ALLOWED_METHODS)),
        "POST" => {
            let image = event.json_body::<UploadImageRequest>()?.decode()?;
            upload_image(state, image).await
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn upload_image(state: &AppState, image: DecodedImage) -> Result<HttpResponse, AppError> {
    let key = object_key(&image.content_type);
    let size = image.bytes.len();

    let url = state
        .object_store
        .put_public(&key, image.bytes, &image.content_type)
        .await?;

    info!(key = %key, size, content_type = %image.content_type, "image uploaded");
    Ok(HttpResponse::json(StatusCode::OK, &UploadImageResponse { url }))
}
