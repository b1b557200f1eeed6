//! Core Hifz revision library shared by the backend and clients.
//!
//! Provides:
//! - Surah reference table (114 surahs with ayah counts and Juz membership)
//! - Revision scheduler (memory-strength decay, sabqi / sabq-para / manzil agenda)
//! - Progress summaries and the memorization path map
//! - Daily streak tracking
//! - XP ranks and levels
//! - `AgendaCache`, for clients that recompute the agenda on every render

pub mod error;
pub mod progress;
pub mod rank;
pub mod scheduler;
pub mod streak;
pub mod surah;
pub mod types;

pub use error::{Result, TableError};
pub use progress::{path_map, quran_progress, LessonRecord, PathNode, PathNodeState, QuranProgress};
pub use rank::{level, Rank, RankProgress, RANKS};
pub use scheduler::{AgendaCache, AgendaLimits, MemoryHealth, RevisionAgenda, RevisionScheduler};
pub use streak::{Milestone, StreakState, StreakTier, StreakUpdate};
pub use surah::{JuzMembership, Revelation, Surah, SurahTable, JUZ_COUNT, SURAH_COUNT};
pub use types::{LessonPosition, MasteryRecord, RevisionItem, RevisionType};
