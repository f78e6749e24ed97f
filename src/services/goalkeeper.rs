//! Goalkeeper leaderboard over `v_GoalkeeperSummary`.

use sqlx::PgPool;

use super::ViewRow;
use crate::errors::AppError;

/// Goalkeepers of a competition, best post-shot xG +/- per 90 first.
/// Keepers without a value are listed last.
pub async fn leaderboard(pool: &PgPool, competition_id: i32) -> Result<Vec<ViewRow>, AppError> {
    let rows = sqlx::query_scalar::<_, ViewRow>(
        r#"
        SELECT to_jsonb(g)
        FROM "v_GoalkeeperSummary" g
        WHERE g."CompetitionKey" = $1
        ORDER BY g."PSxG_PlusMinus_per90" DESC NULLS LAST
        "#,
    )
    .bind(competition_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
