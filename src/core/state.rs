use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::InsightService;
use crate::utils::AppError;

/// Server state - shared handles for all request handlers
///
/// Cloning is shallow; the database handle and HTTP client are internally
/// reference counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Insight generation service (external LLM call)
    pub insight: InsightService,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, insight: InsightService) -> Self {
        Self {
            config,
            db,
            insight,
        }
    }

    /// Initialize server state: open the database under `work_dir` and
    /// construct the insight service from config.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::open(&config.work_dir).await?;
        let insight = InsightService::new(config);
        Ok(Self::new(config.clone(), db_service.db, insight))
    }

    /// In-memory state for tests: no files touched, insight endpoint
    /// is whatever the supplied config points at.
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db_service = DbService::memory().await?;
        let insight = InsightService::new(&config);
        Ok(Self::new(config, db_service.db, insight))
    }
}
