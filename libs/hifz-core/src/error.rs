//! Error types for hifz-core.

use thiserror::Error;

/// Result type alias using TableError.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while building a surah reference table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("expected {expected} surahs, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("surah id {id} is outside 1..=114")]
    IdOutOfRange { id: u32 },

    #[error("duplicate surah id {id}")]
    DuplicateId { id: u32 },

    #[error("surah {id} has no ayahs")]
    NoAyahs { id: u32 },

    #[error("surah {id} lists juz {juz}, outside 1..=30")]
    JuzOutOfRange { id: u32, juz: u8 },

    #[error("surah {id} has an empty juz span")]
    EmptyJuzSpan { id: u32 },

    #[error("juz {juz} is not covered by any surah")]
    UncoveredJuz { juz: u8 },
}
