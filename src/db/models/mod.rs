//! Database Models

pub mod feedback;
pub mod serde_helpers;

pub use feedback::{Feedback, FeedbackCreate, ServiceCategory, ServiceRating};
