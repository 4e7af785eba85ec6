//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`feedback`] - feedback submission
//! - [`analytics`] - aggregated feedback analytics
//! - [`tables`] - table roster with per-table feedback stats

pub mod analytics;
pub mod feedback;
pub mod health;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router with CORS and request tracing
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(feedback::router())
        .merge(analytics::router())
        .merge(tables::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
