//! Feedback Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Fixed set of rated service dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Ambience,
    Cleanliness,
    Taste,
    Service,
    Value,
}

impl ServiceCategory {
    /// Complete category set, in canonical order
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Ambience,
        ServiceCategory::Cleanliness,
        ServiceCategory::Taste,
        ServiceCategory::Service,
        ServiceCategory::Value,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceCategory::Ambience => "ambience",
            ServiceCategory::Cleanliness => "cleanliness",
            ServiceCategory::Taste => "taste",
            ServiceCategory::Service => "service",
            ServiceCategory::Value => "value",
        }
    }

    /// Parse a category name; `None` for anything outside the fixed set
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// Rating values span 1 (worst) to 3 (excellent)
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 3;

/// One rated category inside a feedback record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRating {
    pub service: ServiceCategory,
    pub rating: u8,
}

/// Feedback entity — immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub table_id: String,
    pub ratings: Vec<ServiceRating>,
    pub feedback_text: String,
    /// Unix millis, assigned server-side at insert
    pub created_at: i64,
}

/// Create feedback payload (validated; `created_at` assigned by the repository)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreate {
    pub table_id: String,
    pub ratings: Vec<ServiceRating>,
    pub feedback_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for cat in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_name(cat.name()), Some(cat));
        }
        assert_eq!(ServiceCategory::from_name("parking"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceCategory::Taste).unwrap();
        assert_eq!(json, "\"taste\"");
    }
}
