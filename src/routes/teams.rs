//! Team routes: squad listing.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::services::{team, ViewRow};
use crate::AppState;

/// GET /api/teams/:team_id/players: squad sorted by position, then name.
pub async fn players(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Vec<ViewRow>>, AppError> {
    let players = team::list_players(&state.db, team_id).await?;
    Ok(Json(players))
}
