//! Core types for revision scheduling.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Default surah of today's lesson when the caller gives none.
pub const DEFAULT_CURRENT_SURAH: u32 = 1;

/// Default Juz of today's lesson when the caller gives none.
pub const DEFAULT_CURRENT_JUZ: u8 = 30;

/// A student's last assessment of one surah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    /// Ids that cannot name a surah (negative, fractional, non-numeric)
    /// read as 0, which matches no surah, so the record is skipped.
    #[serde(deserialize_with = "deserialize_surah_id")]
    pub surah_id: u32,
    #[serde(default, deserialize_with = "deserialize_exam_date")]
    pub last_exam_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_count: u32,
    pub passed: bool,
}

/// Where a surah sits in the student's revision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionType {
    /// Today's new lesson.
    Sabqi,
    /// Review within the Juz of today's lesson.
    SabqPara,
    /// Long-cycle spaced repetition.
    Manzil,
}

impl RevisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sabqi => "sabqi",
            Self::SabqPara => "sabq_para",
            Self::Manzil => "manzil",
        }
    }
}

/// One entry of a revision agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionItem {
    pub surah_id: u32,
    pub surah_name: String,
    pub surah_transliteration: String,
    #[serde(rename = "type")]
    pub revision_type: RevisionType,
    /// Lower is more urgent. Always equal to `memory_strength`.
    pub priority: u8,
    pub memory_strength: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub days_overdue: u32,
}

/// Today's lesson position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPosition {
    pub current_surah_id: u32,
    pub current_juz: u8,
}

impl Default for LessonPosition {
    fn default() -> Self {
        Self {
            current_surah_id: DEFAULT_CURRENT_SURAH,
            current_juz: DEFAULT_CURRENT_JUZ,
        }
    }
}

/// Parse an exam date given as RFC 3339, a naive timestamp, or a bare
/// `YYYY-MM-DD` date. Naive values are taken as UTC.
pub fn parse_exam_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSurahId {
    Id(u32),
    Number(f64),
    Other(serde::de::IgnoredAny),
}

fn deserialize_surah_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match RawSurahId::deserialize(deserializer)? {
        RawSurahId::Id(id) => id,
        RawSurahId::Number(n) if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) => {
            n as u32
        }
        RawSurahId::Number(_) | RawSurahId::Other(_) => 0,
    };
    Ok(id)
}

fn deserialize_exam_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_exam_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid exam date: {s}"))),
    }
}
