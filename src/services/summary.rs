//! Server-side landing summary built from the league rows.

use sqlx::PgPool;

use super::league;
use crate::client::normalize;
use crate::client::summary::LandingSummary;
use crate::errors::AppError;

/// Aggregate all leagues with the same rule the dashboard applies locally.
pub async fn landing(pool: &PgPool) -> Result<LandingSummary, AppError> {
    let rows = league::list(pool).await?;
    let leagues = normalize::leagues(&rows)
        .map_err(|e| AppError::Internal(format!("Malformed league row: {e}")))?;
    Ok(LandingSummary::from_leagues(&leagues))
}
