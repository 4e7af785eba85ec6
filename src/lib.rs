//! Feedback Server - table feedback collection for restaurants
//!
//! Customers submit per-category star ratings and a free-text comment via a
//! QR-linked form; a manager dashboard reads aggregated analytics. Free text
//! is optionally analyzed by a local LLM (Ollama-style endpoint) with a fixed
//! neutral fallback when the service is unavailable.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/        # Config, ServerState, Server
//! ├── api/         # HTTP routes and handlers
//! ├── analytics/   # pure aggregation over feedback records
//! ├── db/          # embedded SurrealDB, models, repositories
//! ├── services/    # external insight generation
//! └── utils/       # errors, logging, validation
//! ```

pub mod analytics;
pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState, TableInfo};
pub use crate::db::models::{Feedback, ServiceCategory, ServiceRating};
pub use crate::services::{FeedbackAnalysis, InsightService, Sentiment};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::init_logger;
