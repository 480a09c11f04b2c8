use axum::extract::State;
use axum::http::StatusCode;
use sea_orm::*;
use tracing::{info, instrument};

use crate::cors;
use crate::entity::about_me;
use crate::error::AppError;
use crate::event::{HttpEvent, HttpResponse};
use crate::models::about::*;
use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "GET, PUT, OPTIONS";
const DEFAULT_METHOD: &str = "GET";

/// `GET` returns the stored text, `PUT` replaces it.
#[instrument(name = "about", skip_all, fields(method = event.method_or(DEFAULT_METHOD)))]
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
        "GET" => get_about(&state.db).await,
        "PUT" => {
            let content = event.json_body::<UpdateAboutRequest>()?.validate()?;
            replace_about(&state.db, content).await
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn get_about(db: &DatabaseConnection) -> Result<HttpResponse, AppError> {
    let latest = about_me::Entity::find()
        .order_by_desc(about_me::Column::Id)
        .one(db)
        .await?;

    let content = latest.map(|m| m.content).unwrap_or_default();
    Ok(HttpResponse::json(
        StatusCode::OK,
        &AboutResponse { content },
    ))
}

/// Delete every row and insert the new one inside a single transaction, so
/// readers see either the old or the new content and never an empty table.
async fn replace_about(db: &DatabaseConnection, content: String) -> Result<HttpResponse, AppError> {
    let txn = db.begin().await?;

    let removed = about_me::Entity::delete_many().exec(&txn).await?;

    let model = about_me::ActiveModel {
        content: Set(content),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        id = model.id,
        replaced = removed.rows_affected,
        "about content replaced"
    );
    Ok(HttpResponse::json(
        StatusCode::OK,
        &AboutUpdatedResponse {
            content: model.into(),
        },
    ))
}
