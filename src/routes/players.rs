//! Player routes: single player profile.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::services::{player, ViewRow};
use crate::AppState;

/// GET /api/player/:player_id: one player's summary, 404 when absent.
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(player_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<ViewRow>, AppError> {
    let player = player::find_by_id(&state.db, player_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player {player_id} not found")))?;
    Ok(Json(player))
}
