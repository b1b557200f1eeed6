//! Daily streak endpoint

use axum::Json;
use chrono::{FixedOffset, Utc};

use crate::error::{ApiError, Result};
use crate::models::*;

/// POST /api/streak
pub async fn record_activity(Json(request): Json<StreakRequest>) -> Result<Json<StreakResponse>> {
    let offset = request
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "utc_offset_minutes out of range: {}",
                request.utc_offset_minutes
            ))
        })?;

    let now = request.now.unwrap_or_else(Utc::now);
    let today = now.with_timezone(&offset).date_naive();

    let update = request.state.advance(today);
    let streak = update
        .as_ref()
        .map_or(request.state.current_streak, |u| u.current_streak);

    if let Some(milestone) = update.as_ref().and_then(|u| u.milestone) {
        tracing::info!(?milestone, "Streak milestone reached");
    }

    Ok(Json(StreakResponse {
        update,
        tier: StreakTier::from_streak(streak),
    }))
}
