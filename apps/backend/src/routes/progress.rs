//! Memorization progress endpoint

use axum::{extract::State, Json};
use hifz_core::{path_map, quran_progress};

use crate::error::Result;
use crate::models::*;
use crate::routes::surah_id_param;
use crate::AppState;

/// POST /api/progress
pub async fn summary(
    State(state): State<AppState>,
    Json(request): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>> {
    let current_surah_id = match request.current_surah_id {
        Some(id) => surah_id_param("current_surah_id", id)?,
        None => state.config.default_position.current_surah_id,
    };

    let progress = quran_progress(&state.surahs, &request.lessons);

    let mut completed = progress.completed_surahs.clone();
    completed.extend(request.completed_surah_ids.iter().copied());
    let path = path_map(&state.surahs, &completed, current_surah_id);

    Ok(Json(ProgressResponse { progress, path }))
}
