//! Revision agenda endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::Result;
use crate::models::*;
use crate::routes::lesson_position;
use crate::AppState;

/// POST /api/revision/agenda
pub async fn agenda(
    State(state): State<AppState>,
    Json(request): Json<AgendaRequest>,
) -> Result<Json<AgendaResponse>> {
    let position = lesson_position(
        state.config.default_position,
        request.current_surah_id,
        request.current_juz,
    )?;
    let now = request.now.unwrap_or_else(Utc::now);

    let unknown = request
        .mastery_records
        .iter()
        .filter(|r| state.surahs.get(r.surah_id).is_none())
        .count();
    if unknown > 0 {
        tracing::debug!(unknown, "Ignoring mastery records for unknown surahs");
    }

    let agenda = state
        .scheduler
        .agenda(&state.surahs, &request.mastery_records, position, now);

    tracing::debug!(
        items = agenda.all_items.len(),
        overdue = agenda.overdue_count,
        average_strength = agenda.average_strength,
        "Built revision agenda"
    );

    Ok(Json(AgendaResponse {
        position,
        generated_at: now,
        agenda,
    }))
}
