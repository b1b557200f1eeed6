//! Surah reference endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::juz_param;
use crate::AppState;

/// GET /api/surahs
pub async fn list(State(state): State<AppState>) -> Json<SurahListResponse> {
    Json(SurahListResponse {
        surahs: state.surahs.as_slice().to_vec(),
    })
}

/// GET /api/surahs/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Json<Surah>> {
    state
        .surahs
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Surah {}", id)))
}

/// GET /api/juz/{juz}/surahs
pub async fn in_juz(
    State(state): State<AppState>,
    Path(juz): Path<u32>,
) -> Result<Json<JuzSurahsResponse>> {
    let juz = juz_param("juz", juz)?;
    Ok(Json(JuzSurahsResponse {
        juz,
        surahs: state.surahs.in_juz(juz).cloned().collect(),
    }))
}
