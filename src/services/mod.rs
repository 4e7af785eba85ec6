//! Service Layer
//!
//! - [`InsightService`] - external LLM feedback analysis with graceful fallback

pub mod insight;

pub use insight::{FeedbackAnalysis, InsightService, Sentiment};
