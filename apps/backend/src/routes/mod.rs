pub mod progress;
pub mod rank;
pub mod revision;
pub mod streak;
pub mod surahs;

use hifz_core::{LessonPosition, JUZ_COUNT, SURAH_COUNT};

use crate::error::{ApiError, Result};

/// Validate a surah id supplied by a client.
pub(crate) fn surah_id_param(name: &str, id: u32) -> Result<u32> {
    if (1..=SURAH_COUNT as u32).contains(&id) {
        Ok(id)
    } else {
        Err(ApiError::BadRequest(format!(
            "{} must be between 1 and {}, got {}",
            name, SURAH_COUNT, id
        )))
    }
}

/// Validate a Juz number supplied by a client.
pub(crate) fn juz_param(name: &str, juz: u32) -> Result<u8> {
    match u8::try_from(juz) {
        Ok(j) if (1..=JUZ_COUNT).contains(&j) => Ok(j),
        _ => Err(ApiError::BadRequest(format!(
            "{} must be between 1 and {}, got {}",
            name, JUZ_COUNT, juz
        ))),
    }
}

/// Resolve the lesson position of a request, falling back to the defaults.
pub(crate) fn lesson_position(
    defaults: LessonPosition,
    current_surah_id: Option<u32>,
    current_juz: Option<u32>,
) -> Result<LessonPosition> {
    let current_surah_id = match current_surah_id {
        Some(id) => surah_id_param("current_surah_id", id)?,
        None => defaults.current_surah_id,
    };
    let current_juz = match current_juz {
        Some(juz) => juz_param("current_juz", juz)?,
        None => defaults.current_juz,
    };
    Ok(LessonPosition {
        current_surah_id,
        current_juz,
    })
}
