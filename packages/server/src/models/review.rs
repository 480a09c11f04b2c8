use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::review::{self, ReviewCategory};
use crate::error::AppError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Submitted review. Fields stay loosely typed so that missing, empty and
/// malformed values can be told apart and reported in a fixed order.
#[derive(Deserialize, Default)]
pub struct CreateReviewRequest {
    pub author_name: Option<String>,
    pub category: Option<String>,
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

/// A review that passed validation and is ready to insert.
#[derive(Debug, PartialEq)]
pub struct NewReview {
    pub author_name: String,
    pub category: ReviewCategory,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewRequest {
    /// Checks presence of every field first, then the category, then the rating range.
    pub fn validate(self) -> Result<NewReview, AppError> {
        let author_name = trimmed(self.author_name);
        let category = trimmed(self.category);
        let comment = trimmed(self.comment);
        let rating = self.rating.filter(is_present);

        let (Some(author_name), Some(category), Some(rating), Some(comment)) =
            (author_name, category, rating, comment)
        else {
            return Err(AppError::Validation("All fields are required".into()));
        };

        let category: ReviewCategory = category
            .parse()
            .map_err(|_| AppError::Validation("Invalid category".into()))?;

        let rating = rating
            .as_i64()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Rating must be between {MIN_RATING} and {MAX_RATING}"
                ))
            })?;

        Ok(NewReview {
            author_name,
            category,
            rating: rating as i32,
            comment,
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Zero, `false`, `null` and empty strings or collections count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Which reviews a list request wants.
#[derive(Debug, PartialEq)]
pub enum ReviewFilter {
    All,
    Category(ReviewCategory),
    /// A category value that no stored review can have.
    Unmatched,
}

impl ReviewFilter {
    pub fn from_query(category: Option<&str>) -> Self {
        match category {
            None => Self::All,
            Some(raw) => raw
                .parse()
                .map(Self::Category)
                .unwrap_or(Self::Unmatched),
        }
    }
}

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub author_name: String,
    pub category: ReviewCategory,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewResponse>,
}

#[derive(Serialize)]
pub struct ReviewCreatedResponse {
    pub review: ReviewResponse,
}

impl From<review::Model> for ReviewResponse {
    fn from(model: review::Model) -> Self {
        Self {
            id: model.id,
            author_name: model.author_name,
            category: model.category,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Serialize)]
pub struct OverallStats {
    pub total: i64,
    /// `None` when there are no reviews.
    pub avg_rating: Option<f64>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: ReviewCategory,
    pub total: i64,
    pub avg_rating: f64,
    pub ratings: Vec<i32>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ReviewStatsResponse {
    pub overall: OverallStats,
    pub by_category: Vec<CategoryStats>,
}

impl ReviewStatsResponse {
    /// Aggregate `(category, rating)` pairs. Categories without reviews are
    /// omitted and the rest are listed alphabetically; each category's ratings
    /// keep their input order.
    pub fn from_ratings(rows: impl IntoIterator<Item = (ReviewCategory, i32)>) -> Self {
        let mut groups: BTreeMap<&'static str, (ReviewCategory, Vec<i32>)> = BTreeMap::new();
        let mut total = 0i64;
        let mut sum = 0i64;

        for (category, rating) in rows {
            total += 1;
            sum += i64::from(rating);
            groups
                .entry(category.as_str())
                .or_insert_with(|| (category, Vec::new()))
                .1
                .push(rating);
        }

        let by_category = groups
            .into_values()
            .map(|(category, ratings)| {
                let count = ratings.len() as i64;
                let sum = ratings.iter().map(|&r| i64::from(r)).sum();
                CategoryStats {
                    category,
                    total: count,
                    avg_rating: rounded_average(sum, count).unwrap_or_default(),
                    ratings,
                }
            })
            .collect();

        Self {
            overall: OverallStats {
                total,
                avg_rating: rounded_average(sum, total),
            },
            by_category,
        }
    }
}

/// `sum / count` rounded half-up to two decimal places, computed on integers
/// so that e.g. 201/200 gives 1.01 rather than a binary-float 1.00.
pub fn rounded_average(sum: i64, count: i64) -> Option<f64> {
    if count <= 0 {
        return None;
    }
    let hundredths = (sum * 200 + count).div_euclid(2 * count);
    Some(hundredths as f64 / 100.0)
}
