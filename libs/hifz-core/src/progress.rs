//! Memorization progress derived from a student's lesson log.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::surah::{Revelation, SurahTable, JUZ_COUNT};

/// Lesson rating at or above which a surah counts as completed.
pub const MASTERED_RATING: i32 = 4;

/// Surahs per row of the path map.
pub const PATH_ROW_LEN: usize = 7;

/// A logged lesson, as stored by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Surah label: Arabic name or transliteration.
    pub surah: String,
    #[serde(default)]
    pub rating_progress: Option<i32>,
    #[serde(default, alias = "juzz")]
    pub juz: Option<i32>,
}

/// Summary of completed material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuranProgress {
    pub completed_surahs: Vec<u32>,
    pub completed_juz: Vec<u8>,
    pub lesson_count: usize,
}

/// Summarize a lesson log. Unrecognized surah labels are ignored.
pub fn quran_progress(table: &SurahTable, lessons: &[LessonRecord]) -> QuranProgress {
    let mut surahs = BTreeSet::new();
    let mut juz = BTreeSet::new();

    for lesson in lessons {
        let mastered = lesson.rating_progress.is_some_and(|r| r >= MASTERED_RATING);
        if mastered {
            if let Some(surah) = table.find_by_label(&lesson.surah) {
                surahs.insert(surah.id);
            }
        }

        if let Some(j) = lesson.juz {
            if (1..=i32::from(JUZ_COUNT)).contains(&j) {
                juz.insert(j as u8);
            }
        }
    }

    QuranProgress {
        completed_surahs: surahs.into_iter().collect(),
        completed_juz: juz.into_iter().collect(),
        lesson_count: lessons.len(),
    }
}

/// State of one surah on the memorization path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathNodeState {
    Completed,
    Active,
    Locked,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub surah_id: u32,
    pub transliteration: String,
    pub total_ayahs: u32,
    pub revelation: Revelation,
    pub state: PathNodeState,
}

/// Lay every surah out on the path, in rows of [`PATH_ROW_LEN`].
pub fn path_map(table: &SurahTable, completed: &[u32], current_surah_id: u32) -> Vec<Vec<PathNode>> {
    let completed: BTreeSet<u32> = completed.iter().copied().collect();

    let nodes: Vec<PathNode> = table
        .iter()
        .map(|surah| {
            let state = if completed.contains(&surah.id) {
                PathNodeState::Completed
            } else if surah.id == current_surah_id {
                PathNodeState::Active
            } else if surah.id > current_surah_id {
                PathNodeState::Locked
            } else {
                PathNodeState::Open
            };

            PathNode {
                surah_id: surah.id,
                transliteration: surah.transliteration.clone(),
                total_ayahs: surah.total_ayahs,
                revelation: surah.revelation,
                state,
            }
        })
        .collect();

    nodes.chunks(PATH_ROW_LEN).map(<[PathNode]>::to_vec).collect()
}
