use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::cors;
use crate::entity::review::{self, ReviewCategory};
use crate::error::AppError;
use crate::event::{HttpEvent, HttpResponse};
use crate::models::review::*;
use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const DEFAULT_METHOD: &str = "GET";

/// `GET` lists reviews (newest first, optional `category`) or, with
/// `action=stats`, returns rating statistics. `POST` submits a review.
#[instrument(name = "reviews", skip_all, fields(method = event.method_or(DEFAULT_METHOD)))]
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
        "GET" => match event.query("action") {
            Some("stats") => review_stats(&state.db).await,
            _ => {
                let filter = ReviewFilter::from_query(event.query("category"));
                list_reviews(&state.db, filter).await
            }
        },
        "POST" => {
            let new_review = event.json_body::<CreateReviewRequest>()?.validate()?;
            create_review(&state.db, new_review).await
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn list_reviews(
    db: &DatabaseConnection,
    filter: ReviewFilter,
) -> Result<HttpResponse, AppError> {
    let mut select = review::Entity::find();
    match filter {
        ReviewFilter::All => {}
        ReviewFilter::Category(category) => {
            select = select.filter(review::Column::Category.eq(category));
        }
        ReviewFilter::Unmatched => {
            return Ok(HttpResponse::json(
                StatusCode::OK,
                &ReviewListResponse { reviews: vec![] },
            ));
        }
    }

    let reviews = select
        .order_by_desc(review::Column::CreatedAt)
        .order_by_desc(review::Column::Id)
        .all(db)
        .await?;

    Ok(HttpResponse::json(
        StatusCode::OK,
        &ReviewListResponse {
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
        },
    ))
}

async fn review_stats(db: &DatabaseConnection) -> Result<HttpResponse, AppError> {
    let ratings: Vec<(ReviewCategory, i32)> = review::Entity::find()
        .select_only()
        .column(review::Column::Category)
        .column(review::Column::Rating)
        .order_by_asc(review::Column::Id)
        .into_tuple()
        .all(db)
        .await?;

    let stats = ReviewStatsResponse::from_ratings(ratings);
    Ok(HttpResponse::json(StatusCode::OK, &stats))
}

async fn create_review(
    db: &DatabaseConnection,
    new_review: NewReview,
) -> Result<HttpResponse, AppError> {
    let model = review::ActiveModel {
        author_name: Set(new_review.author_name),
        category: Set(new_review.category),
        rating: Set(new_review.rating),
        comment: Set(new_review.comment),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(
        id = model.id,
        category = %model.category,
        rating = model.rating,
        "review created"
    );
    Ok(HttpResponse::json(
        StatusCode::CREATED,
        &ReviewCreatedResponse {
            review: model.into(),
        },
    ))
}
