//! Table Roster API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::analytics::table_rating_summary;
use crate::core::ServerState;
use crate::db::repository::FeedbackRepository;
use crate::utils::AppResult;

/// Roster entry augmented with per-table feedback stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatus {
    pub id: String,
    pub location: String,
    pub capacity: u32,
    pub feedback_count: u64,
    pub average_rating: f64,
}

/// GET /api/tables - static roster with per-table feedback count and average
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableStatus>>> {
    let repo = FeedbackRepository::new(state.db.clone());
    let records = repo.find_all().await?;

    let tables = state
        .config
        .roster
        .iter()
        .map(|table| {
            let (feedback_count, average_rating) = table_rating_summary(&records, &table.id);
            TableStatus {
                id: table.id.clone(),
                location: table.location.clone(),
                capacity: table.capacity,
                feedback_count,
                average_rating,
            }
        })
        .collect();

    Ok(Json(tables))
}
