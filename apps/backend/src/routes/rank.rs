//! XP rank endpoint

use axum::Json;

use crate::models::*;

/// POST /api/rank
pub async fn summary(Json(request): Json<RankRequest>) -> Json<RankProgress> {
    Json(RankProgress::from_xp(request.xp))
}
