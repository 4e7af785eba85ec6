//! Feedback Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Feedback, FeedbackCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "feedback";

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert one immutable feedback record with a server-assigned timestamp
    pub async fn create(&self, data: FeedbackCreate) -> RepoResult<Feedback> {
        let record = Feedback {
            id: None,
            table_id: data.table_id,
            ratings: data.ratings,
            feedback_text: data.feedback_text,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let created: Option<Feedback> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create feedback".to_string()))
    }

    /// All feedback records, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Feedback>> {
        let records: Vec<Feedback> = self
            .base
            .db()
            .query("SELECT * FROM feedback ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(records)
    }
}
