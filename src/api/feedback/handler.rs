//! Feedback API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{FeedbackCreate, ServiceCategory, ServiceRating};
use crate::db::models::feedback::{MAX_RATING, MIN_RATING};
use crate::db::repository::FeedbackRepository;
use crate::services::FeedbackAnalysis;
use crate::utils::validation::{
    MAX_FEEDBACK_TEXT_LEN, MAX_TABLE_ID_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Submit feedback payload. Fields are optional at the serde level so that
/// missing values produce the service's own 400 body instead of an
/// extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub ratings: Option<Vec<RatingInput>>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

/// One rating as submitted; category and value are checked explicitly
/// against the fixed sets.
#[derive(Debug, Deserialize)]
pub struct RatingInput {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub feedback_id: String,
    pub message: String,
    pub analysis: FeedbackAnalysis,
}

/// POST /api/feedback - store one feedback record and analyze it
///
/// The insight call runs after the insert and can only degrade to the
/// fallback analysis; it never turns a successful submission into an error.
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<SubmitFeedbackRequest>,
) -> AppResult<(StatusCode, Json<SubmitFeedbackResponse>)> {
    let data = validate_payload(payload)?;

    let repo = FeedbackRepository::new(state.db.clone());
    let created = repo.create(data).await?;

    let analysis = state
        .insight
        .analyze(&created.feedback_text, &created.ratings)
        .await;

    let feedback_id = created
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    tracing::info!(
        feedback_id = %feedback_id,
        table_id = %created.table_id,
        ratings = created.ratings.len(),
        "Feedback saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitFeedbackResponse {
            feedback_id,
            message: "Feedback saved successfully".to_string(),
            analysis,
        }),
    ))
}

/// Check required fields, the fixed category set and the 1..=3 rating range.
/// Nothing is written when any check fails.
fn validate_payload(payload: SubmitFeedbackRequest) -> Result<FeedbackCreate, AppError> {
    let (Some(table_id), Some(ratings), Some(feedback_text)) =
        (payload.table_id, payload.ratings, payload.feedback_text)
    else {
        return Err(AppError::validation("Missing required fields"));
    };

    validate_required_text(&table_id, "tableId", MAX_TABLE_ID_LEN)?;
    validate_required_text(&feedback_text, "feedbackText", MAX_FEEDBACK_TEXT_LEN)?;

    if ratings.is_empty() {
        return Err(AppError::validation("At least one rating is required"));
    }

    let ratings = ratings
        .into_iter()
        .map(|r| {
            let service = r
                .service
                .as_deref()
                .and_then(ServiceCategory::from_name)
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "Invalid ratings format: unknown service category '{}'",
                        r.service.as_deref().unwrap_or("")
                    ))
                })?;
            let rating = match r.rating {
                Some(v) if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&v) => v as u8,
                other => {
                    return Err(AppError::validation(format!(
                        "Invalid ratings format: rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                        other.map(|v| v.to_string()).unwrap_or_else(|| "none".into())
                    )));
                }
            };
            Ok(ServiceRating { service, rating })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(FeedbackCreate {
        table_id,
        ratings,
        feedback_text,
    })
}
