//! Database Module
//!
//! Embedded SurrealDB handle and startup.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "feedback";
const DATABASE: &str = "feedback";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database under `{work_dir}/database`
    pub async fn open(work_dir: &str) -> Result<Self, AppError> {
        let db_dir = Path::new(work_dir).join("database");
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::database(format!("Failed to create database dir: {e}")))?;

        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::select_ns(&db).await?;

        tracing::info!(path = %db_dir.display(), "Database connection established");
        Ok(Self { db })
    }

    /// In-memory database for tests
    pub async fn memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::select_ns(&db).await?;
        Ok(Self { db })
    }

    async fn select_ns(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
    }
}
