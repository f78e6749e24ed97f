//! Landing summary route.

use axum::{extract::State, Json};

use crate::client::summary::LandingSummary;
use crate::errors::AppError;
use crate::services::summary;
use crate::AppState;

/// GET /api/summary: totals across all leagues.
pub async fn landing(State(state): State<AppState>) -> Result<Json<LandingSummary>, AppError> {
    let summary = summary::landing(&state.db).await?;
    Ok(Json(summary))
}
