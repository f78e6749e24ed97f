//! Team and squad queries over `v_TeamSquad`.

use sqlx::PgPool;

use super::ViewRow;
use crate::errors::AppError;
use crate::models::team::TeamRef;

/// Distinct teams of a competition, ordered by name.
pub async fn list_by_competition(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Vec<TeamRef>, AppError> {
    let teams = sqlx::query_as::<_, TeamRef>(
        r#"
        SELECT DISTINCT "TeamKey", "TeamName"
        FROM "v_TeamSquad"
        WHERE "CompetitionKey" = $1
        ORDER BY "TeamName"
        "#,
    )
    .bind(competition_id)
    .fetch_all(pool)
    .await?;
    Ok(teams)
}

/// Squad of a team, ordered by position code then player name.
pub async fn list_players(pool: &PgPool, team_id: i32) -> Result<Vec<ViewRow>, AppError> {
    let rows = sqlx::query_scalar::<_, ViewRow>(
        r#"
        SELECT to_jsonb(s)
        FROM "v_TeamSquad" s
        WHERE s."TeamKey" = $1
        ORDER BY s."PositionCode", s."PlayerName"
        "#,
    )
    .bind(team_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
