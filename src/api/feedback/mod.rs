//! Feedback API module

mod handler;

pub use handler::{RatingInput, SubmitFeedbackRequest, SubmitFeedbackResponse};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/feedback", post(handler::submit))
}
