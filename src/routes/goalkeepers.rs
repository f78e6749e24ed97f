//! Goalkeeper leaderboard routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::models::goalkeeper::GoalkeeperFilter;
use crate::services::{goalkeeper, ViewRow};
use crate::AppState;

/// GET /api/goalkeepers?competitionId=N: leaderboard, best PSxG+/- per 90 first.
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(filter), _): WithRejection<Query<GoalkeeperFilter>, AppError>,
) -> Result<Json<Vec<ViewRow>>, AppError> {
    let rows = goalkeeper::leaderboard(&state.db, filter.competition_id).await?;
    Ok(Json(rows))
}

/// GET /api/leagues/:competition_id/goalkeepers: same leaderboard, path form.
pub async fn by_league(
    State(state): State<AppState>,
    WithRejection(Path(competition_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Vec<ViewRow>>, AppError> {
    let rows = goalkeeper::leaderboard(&state.db, competition_id).await?;
    Ok(Json(rows))
}
