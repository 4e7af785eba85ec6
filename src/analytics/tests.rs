use super::*;
use crate::db::models::{Feedback, ServiceRating};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn record(table_id: &str, ratings: &[(ServiceCategory, u8)], created_at: i64) -> Feedback {
    Feedback {
        id: None,
        table_id: table_id.to_string(),
        ratings: ratings
            .iter()
            .map(|&(service, rating)| ServiceRating { service, rating })
            .collect(),
        feedback_text: "some feedback".to_string(),
        created_at,
    }
}

#[test]
fn empty_record_set_yields_zeroed_snapshot() {
    let snapshot = compute_snapshot(&[], 0);

    assert_eq!(snapshot.total_feedbacks, 0);
    assert_eq!(snapshot.overall_average_rating, 0.0);
    assert_eq!(snapshot.responses_today, 0);
    assert!(snapshot.table_breakdown.is_empty());
    assert!(snapshot.recent_feedbacks.is_empty());

    // Full category schema even with no data
    assert_eq!(snapshot.categories.len(), 5);
    for cat in ServiceCategory::ALL {
        let stats = &snapshot.categories[&cat];
        assert_eq!(stats.feedback_count, 0);
        assert_eq!(stats.total_rating_sum, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(snapshot.sentiment_distribution[&cat].score, 0);
    }
}

#[test]
fn sentiment_score_extremes() {
    assert_eq!(sentiment_score(0, 0, 0), 0);
    assert_eq!(sentiment_score(5, 0, 0), 0);
    assert_eq!(sentiment_score(0, 0, 5), 100);
    assert_eq!(sentiment_score(0, 7, 0), 50);
    // Even split across the three buckets
    assert_eq!(sentiment_score(3, 3, 3), 50);
}

#[test]
fn single_submission_updates_category_and_table_stats() {
    let now = 1_000_000 * DAY_MS;
    let records = vec![record(
        "1",
        &[(ServiceCategory::Taste, 3), (ServiceCategory::Service, 1)],
        now,
    )];

    let snapshot = compute_snapshot(&records, now);

    assert_eq!(snapshot.total_feedbacks, 1);
    assert_eq!(snapshot.categories[&ServiceCategory::Taste].feedback_count, 1);
    assert_eq!(snapshot.categories[&ServiceCategory::Taste].total_rating_sum, 3);
    assert_eq!(snapshot.categories[&ServiceCategory::Service].feedback_count, 1);
    assert_eq!(snapshot.categories[&ServiceCategory::Service].total_rating_sum, 1);
    // Untouched categories stay present and zeroed
    assert_eq!(snapshot.categories[&ServiceCategory::Ambience].feedback_count, 0);

    let table = &snapshot.table_breakdown["1"];
    assert_eq!(table[&ServiceCategory::Taste].excellent, 1);
    assert_eq!(table[&ServiceCategory::Taste].worst, 0);
    assert_eq!(table[&ServiceCategory::Service].worst, 1);
    // (3 + 1) / 2 = 2.0
    assert_eq!(snapshot.overall_average_rating, 2.0);
}

#[test]
fn overall_average_rounds_to_two_decimals() {
    let now = 0;
    let records = vec![
        record("1", &[(ServiceCategory::Taste, 3)], now),
        record("1", &[(ServiceCategory::Taste, 3)], now),
        record("1", &[(ServiceCategory::Taste, 1)], now),
    ];
    // 7 / 3 = 2.333... -> 2.33
    let snapshot = compute_snapshot(&records, now);
    assert_eq!(snapshot.overall_average_rating, 2.33);
}

#[test]
fn responses_today_uses_rolling_24h_window() {
    let now = 100 * DAY_MS;
    let records = vec![
        record("1", &[(ServiceCategory::Value, 2)], now - DAY_MS + 1),
        record("2", &[(ServiceCategory::Value, 2)], now - DAY_MS - 1),
        record("3", &[(ServiceCategory::Value, 2)], now),
    ];

    let snapshot = compute_snapshot(&records, now);

    assert_eq!(snapshot.total_feedbacks, 3);
    assert_eq!(snapshot.responses_today, 2);
    // Newest first
    assert_eq!(snapshot.recent_feedbacks[0].table_id, "3");
    assert_eq!(snapshot.recent_feedbacks[1].table_id, "1");
}

#[test]
fn tables_without_records_are_absent() {
    let now = 0;
    let records = vec![record("2", &[(ServiceCategory::Ambience, 2)], now)];

    let snapshot = compute_snapshot(&records, now);

    assert_eq!(snapshot.table_breakdown.len(), 1);
    assert!(snapshot.table_breakdown.contains_key("2"));
    // Present tables still carry the full category schema
    assert_eq!(snapshot.table_breakdown["2"].len(), 5);
}

#[test]
fn distribution_sums_per_table_histograms() {
    let now = 0;
    let records = vec![
        record("1", &[(ServiceCategory::Taste, 3)], now),
        record("2", &[(ServiceCategory::Taste, 3)], now),
        record("2", &[(ServiceCategory::Taste, 1)], now),
    ];

    let snapshot = compute_snapshot(&records, now);

    let dist = &snapshot.sentiment_distribution[&ServiceCategory::Taste];
    assert_eq!(dist.excellent, 2);
    assert_eq!(dist.worst, 1);
    // mean = (1 + 3 + 3) / 3 = 2.333 -> (2.333 - 1) / 2 * 100 = 67
    assert_eq!(dist.score, 67);
}

#[test]
fn snapshot_is_idempotent() {
    let now = 50 * DAY_MS;
    let records = vec![
        record("1", &[(ServiceCategory::Taste, 3), (ServiceCategory::Value, 2)], now),
        record("4", &[(ServiceCategory::Cleanliness, 1)], now - 1000),
    ];

    let a = serde_json::to_value(compute_snapshot(&records, now)).unwrap();
    let b = serde_json::to_value(compute_snapshot(&records, now)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn table_summary_averages_individual_ratings() {
    let now = 0;
    let records = vec![
        record("1", &[(ServiceCategory::Taste, 3), (ServiceCategory::Service, 2)], now),
        record("1", &[(ServiceCategory::Taste, 2)], now),
        record("2", &[(ServiceCategory::Taste, 1)], now),
    ];

    let (count, average) = table_rating_summary(&records, "1");
    assert_eq!(count, 2);
    // (3 + 2 + 2) / 3 = 2.333 -> 2.3
    assert_eq!(average, 2.3);

    let (count, average) = table_rating_summary(&records, "9");
    assert_eq!(count, 0);
    assert_eq!(average, 0.0);
}
