//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from hifz-core
pub use hifz_core::{
    LessonPosition, LessonRecord, MasteryRecord, PathNode, QuranProgress, RankProgress,
    RevisionAgenda, StreakState, StreakTier, StreakUpdate, Surah,
};

// === Surah Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SurahListResponse {
    pub surahs: Vec<Surah>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JuzSurahsResponse {
    pub juz: u8,
    pub surahs: Vec<Surah>,
}

// === Revision Types ===

/// Body of POST /api/revision/agenda
#[derive(Debug, Serialize, Deserialize)]
pub struct AgendaRequest {
    #[serde(default)]
    pub mastery_records: Vec<MasteryRecord>,
    pub current_surah_id: Option<u32>,
    pub current_juz: Option<u32>,
    /// Reference time; the server clock when absent.
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgendaResponse {
    pub position: LessonPosition,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub agenda: RevisionAgenda,
}

// === Progress Types ===

/// Body of POST /api/progress
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressRequest {
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
    /// Extra completed surahs to mark on the path (e.g. from passed exams).
    #[serde(default)]
    pub completed_surah_ids: Vec<u32>,
    pub current_surah_id: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub progress: QuranProgress,
    pub path: Vec<Vec<PathNode>>,
}

// === Streak Types ===

/// Body of POST /api/streak
#[derive(Debug, Serialize, Deserialize)]
pub struct StreakRequest {
    #[serde(flatten)]
    pub state: StreakState,
    /// Student's offset from UTC, used to find their local "today".
    #[serde(default)]
    pub utc_offset_minutes: i32,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    /// `None` when today's activity was already counted.
    pub update: Option<StreakUpdate>,
    pub tier: StreakTier,
}

// === Rank Types ===

/// Body of POST /api/rank
#[derive(Debug, Serialize, Deserialize)]
pub struct RankRequest {
    pub xp: u64,
}
