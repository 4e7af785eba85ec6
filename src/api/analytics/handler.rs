//! Analytics API Handlers

use axum::{Json, extract::State};

use crate::analytics::{AnalyticsSnapshot, compute_snapshot};
use crate::core::ServerState;
use crate::db::repository::FeedbackRepository;
use crate::utils::AppResult;

/// GET /api/analytics - compute the analytics snapshot over all records
pub async fn get_analytics(
    State(state): State<ServerState>,
) -> AppResult<Json<AnalyticsSnapshot>> {
    let repo = FeedbackRepository::new(state.db.clone());
    let records = repo.find_all().await?;

    let now = chrono::Utc::now().timestamp_millis();
    let snapshot = compute_snapshot(&records, now);

    tracing::debug!(
        total = snapshot.total_feedbacks,
        today = snapshot.responses_today,
        "Analytics snapshot computed"
    );

    Ok(Json(snapshot))
}
