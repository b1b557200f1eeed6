//! Test fixtures and factory functions for request bodies.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

/// Fixed reference time so agendas are reproducible.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// A mastery record examined `days_ago` days before [`reference_now`].
pub fn mastery_record(
    surah_id: u32,
    days_ago: Option<i64>,
    error_count: u32,
    passed: bool,
) -> serde_json::Value {
    json!({
        "surah_id": surah_id,
        "last_exam_date": days_ago.map(|d| (reference_now() - Duration::days(d)).to_rfc3339()),
        "error_count": error_count,
        "passed": passed,
    })
}

/// Create an agenda request body pinned to [`reference_now`].
pub fn agenda_request(
    records: Vec<serde_json::Value>,
    current_surah_id: Option<u32>,
    current_juz: Option<u32>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("mastery_records".to_string(), json!(records));
    obj.insert("now".to_string(), json!(reference_now().to_rfc3339()));
    if let Some(id) = current_surah_id {
        obj.insert("current_surah_id".to_string(), json!(id));
    }
    if let Some(juz) = current_juz {
        obj.insert("current_juz".to_string(), json!(juz));
    }
    serde_json::Value::Object(obj)
}

/// A logged lesson.
pub fn lesson(surah: &str, rating_progress: Option<i32>, juz: Option<i32>) -> serde_json::Value {
    json!({
        "surah": surah,
        "rating_progress": rating_progress,
        "juz": juz,
    })
}

/// Create a progress request body.
pub fn progress_request(
    lessons: Vec<serde_json::Value>,
    completed_surah_ids: Vec<u32>,
    current_surah_id: Option<u32>,
) -> serde_json::Value {
    json!({
        "lessons": lessons,
        "completed_surah_ids": completed_surah_ids,
        "current_surah_id": current_surah_id,
    })
}

/// Create a streak request body.
pub fn streak_request(
    current_streak: u32,
    longest_streak: u32,
    last_activity_date: Option<&str>,
    utc_offset_minutes: i32,
    now: DateTime<Utc>,
) -> serde_json::Value {
    json!({
        "current_streak": current_streak,
        "longest_streak": longest_streak,
        "last_activity_date": last_activity_date,
        "utc_offset_minutes": utc_offset_minutes,
        "now": now.to_rfc3339(),
    })
}
