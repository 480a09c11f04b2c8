use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::cors;
use crate::entity::profile_photo;
use crate::error::AppError;
use crate::event::{HttpEvent, HttpResponse};
use crate::models::photo::*;
use crate::models::shared::SuccessResponse;
use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
const DEFAULT_METHOD: &str = "GET";

/// `GET` lists photos in display order, `POST` appends one, `DELETE ?id=` removes one.
#[instrument(name = "photos", skip_all, fields(method = event.method_or(DEFAULT_METHOD)))]
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
        "GET" => list_photos(&state.db).await,
        "POST" => {
            let photo_url = event.json_body::<AddPhotoRequest>()?.validate()?;
            add_photo(&state.db, photo_url).await
        }
        "DELETE" => {
            let id = parse_photo_id(event.query("id"))?;
            delete_photo(&state.db, id).await
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn list_photos(db: &DatabaseConnection) -> Result<HttpResponse, AppError> {
    let photos = profile_photo::Entity::find()
        .order_by_asc(profile_photo::Column::DisplayOrder)
        .order_by_asc(profile_photo::Column::Id)
        .all(db)
        .await?;

    Ok(HttpResponse::json(
        StatusCode::OK,
        &PhotoListResponse {
            photos: photos.into_iter().map(PhotoResponse::from).collect(),
        },
    ))
}

/// Append a photo after the current last one.
///
/// The order lookup and the insert share a transaction, but two concurrent
/// appends can still read the same maximum and receive equal `display_order`
/// values; listing breaks such ties by id.
async fn add_photo(db: &DatabaseConnection, photo_url: String) -> Result<HttpResponse, AppError> {
    let txn = db.begin().await?;

    let display_order = next_display_order(&txn).await?;
    let model = profile_photo::ActiveModel {
        photo_url: Set(photo_url),
        display_order: Set(display_order),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(id = model.id, display_order, "photo added");
    Ok(HttpResponse::json(
        StatusCode::CREATED,
        &PhotoCreatedResponse {
            photo: model.into(),
        },
    ))
}

/// Deleting an id that does not exist is not an error.
async fn delete_photo(db: &DatabaseConnection, id: i32) -> Result<HttpResponse, AppError> {
    let result = profile_photo::Entity::delete_by_id(id).exec(db).await?;

    info!(id, removed = result.rows_affected, "photo delete processed");
    Ok(HttpResponse::json(StatusCode::OK, &SuccessResponse::ok()))
}

/// Compute the display order for a new photo: one past the current maximum, starting at 1.
async fn next_display_order<C: ConnectionTrait>(db: &C) -> Result<i32, AppError> {
    let max_order: Option<i32> = profile_photo::Entity::find()
        .select_only()
        .column_as(profile_photo::Column::DisplayOrder.max(), "max_order")
        .into_tuple::<Option<i32>>()
        .one(db)
        .await?
        .flatten();
    max_order
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::Internal("display_order overflow".into()))
}
