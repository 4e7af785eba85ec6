//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! feedback submission payload.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Table identifiers and other short ids
pub const MAX_TABLE_ID_LEN: usize = 100;

/// Free-text feedback comments
pub const MAX_FEEDBACK_TEXT_LEN: usize = 2000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty (after trimming) and within
/// the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}
