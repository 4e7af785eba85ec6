//! Feedback analytics aggregation
//!
//! Pure computation over the full feedback record set. The snapshot is
//! derived at read time and recomputed on every request; an unchanged
//! record set always yields an identical snapshot.
//!
//! Output is fully keyed: every one of the five categories appears in every
//! per-category map (zero-valued when unrated), so consumers never rely on
//! positional array alignment. Tables appear in the breakdown only when at
//! least one record references them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::models::{Feedback, ServiceCategory};

#[cfg(test)]
mod tests;

/// Rolling window for `responses_today` (last 24 hours)
pub const RESPONSES_TODAY_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Per-category rating statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    /// Number of individual ratings tagged with this category
    pub feedback_count: u64,
    /// Sum of rating values (1..=3) for this category
    pub total_rating_sum: u64,
    /// `total_rating_sum / feedback_count`, 0 when unrated
    pub average_rating: f64,
}

/// Worst/average/excellent counts for one category plus the derived score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub worst: u64,
    pub average: u64,
    pub excellent: u64,
    /// 0-100 mapping of the mean bucket value, 0 when no ratings
    pub score: u32,
}

impl SentimentBreakdown {
    fn record(&mut self, rating: u8) {
        match rating {
            1 => self.worst += 1,
            2 => self.average += 1,
            3 => self.excellent += 1,
            // Out-of-range values are rejected at submission; ignore here
            _ => {}
        }
    }

    fn with_score(mut self) -> Self {
        self.score = sentiment_score(self.worst, self.average, self.excellent);
        self
    }
}

/// Read-time computed aggregate over all feedback records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_feedbacks: u64,
    /// Mean of all rating values across all categories, 2 decimals, 0 when empty
    pub overall_average_rating: f64,
    /// Records created within the last 24 hours
    pub responses_today: u64,
    /// Complete fixed-category stats (never omits a category)
    pub categories: BTreeMap<ServiceCategory, CategoryStats>,
    /// Restaurant-wide per-category sentiment histogram
    pub sentiment_distribution: BTreeMap<ServiceCategory, SentimentBreakdown>,
    /// Per-table, per-category sentiment histograms (only tables with records)
    pub table_breakdown: BTreeMap<String, BTreeMap<ServiceCategory, SentimentBreakdown>>,
    /// Records inside the `responses_today` window, newest first
    pub recent_feedbacks: Vec<Feedback>,
}

/// Full category map with zero-valued entries
fn zeroed<V: Default + Copy>() -> BTreeMap<ServiceCategory, V> {
    ServiceCategory::ALL
        .iter()
        .map(|&c| (c, V::default()))
        .collect()
}

/// Map the mean bucket value (1..=3) onto a 0-100 scale.
///
/// All-worst -> 0, even three-way split -> 50, all-excellent -> 100,
/// no ratings -> 0.
pub fn sentiment_score(worst: u64, average: u64, excellent: u64) -> u32 {
    let total = worst + average + excellent;
    if total == 0 {
        return 0;
    }
    let mean = (worst + average * 2 + excellent * 3) as f64 / total as f64;
    ((mean - 1.0) / 2.0 * 100.0).round() as u32
}

/// Compute the analytics snapshot over `records`.
///
/// `now_millis` anchors the rolling `responses_today` window so the
/// computation itself stays deterministic.
pub fn compute_snapshot(records: &[Feedback], now_millis: i64) -> AnalyticsSnapshot {
    let mut categories: BTreeMap<ServiceCategory, CategoryStats> = zeroed();
    let mut distribution: BTreeMap<ServiceCategory, SentimentBreakdown> = zeroed();
    let mut table_breakdown: BTreeMap<String, BTreeMap<ServiceCategory, SentimentBreakdown>> =
        BTreeMap::new();

    for record in records {
        let table = table_breakdown
            .entry(record.table_id.clone())
            .or_insert_with(zeroed);

        for rating in &record.ratings {
            let stats = categories.entry(rating.service).or_default();
            stats.feedback_count += 1;
            stats.total_rating_sum += u64::from(rating.rating);

            distribution.entry(rating.service).or_default().record(rating.rating);
            table.entry(rating.service).or_default().record(rating.rating);
        }
    }

    for stats in categories.values_mut() {
        if stats.feedback_count > 0 {
            stats.average_rating = stats.total_rating_sum as f64 / stats.feedback_count as f64;
        }
    }

    let total_ratings: u64 = categories.values().map(|s| s.feedback_count).sum();
    let total_sum: u64 = categories.values().map(|s| s.total_rating_sum).sum();
    let overall_average_rating = if total_ratings > 0 {
        round2(total_sum as f64 / total_ratings as f64)
    } else {
        0.0
    };

    let since = now_millis - RESPONSES_TODAY_WINDOW_MS;
    let mut recent_feedbacks: Vec<Feedback> = records
        .iter()
        .filter(|r| r.created_at >= since)
        .cloned()
        .collect();
    recent_feedbacks.sort_by_key(|r| std::cmp::Reverse(r.created_at));

    AnalyticsSnapshot {
        total_feedbacks: records.len() as u64,
        overall_average_rating,
        responses_today: recent_feedbacks.len() as u64,
        categories,
        sentiment_distribution: distribution
            .into_iter()
            .map(|(c, h)| (c, h.with_score()))
            .collect(),
        table_breakdown: table_breakdown
            .into_iter()
            .map(|(table, per_cat)| {
                (
                    table,
                    per_cat.into_iter().map(|(c, h)| (c, h.with_score())).collect(),
                )
            })
            .collect(),
        recent_feedbacks,
    }
}

/// Feedback count and average rating (1 decimal) for one table's records
pub fn table_rating_summary(records: &[Feedback], table_id: &str) -> (u64, f64) {
    let mut feedback_count = 0u64;
    let mut rating_count = 0u64;
    let mut rating_sum = 0u64;

    for record in records.iter().filter(|r| r.table_id == table_id) {
        feedback_count += 1;
        for rating in &record.ratings {
            rating_count += 1;
            rating_sum += u64::from(rating.rating);
        }
    }

    let average = if rating_count > 0 {
        round1(rating_sum as f64 / rating_count as f64)
    } else {
        0.0
    };
    (feedback_count, average)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
