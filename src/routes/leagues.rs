//! League routes: summary list and the teams of one league.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::models::team::TeamRef;
use crate::services::{league, team, ViewRow};
use crate::AppState;

/// GET /api/leagues: every league summary row.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ViewRow>>, AppError> {
    let leagues = league::list(&state.db).await?;
    Ok(Json(leagues))
}

/// GET /api/leagues/:competition_id/teams: distinct teams, sorted by name.
pub async fn teams(
    State(state): State<AppState>,
    WithRejection(Path(competition_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Vec<TeamRef>>, AppError> {
    let teams = team::list_by_competition(&state.db, competition_id).await?;
    tracing::debug!(competition_id, count = teams.len(), "Listed league teams");
    Ok(Json(teams))
}
