//! Single player lookup over `v_PlayerSummary`.

use sqlx::PgPool;

use super::ViewRow;
use crate::errors::AppError;

/// Fetch one player's summary row. `None` when the key matches nothing.
pub async fn find_by_id(pool: &PgPool, player_id: i32) -> Result<Option<ViewRow>, AppError> {
    let row = sqlx::query_scalar::<_, ViewRow>(
        r#"
        SELECT to_jsonb(p)
        FROM "v_PlayerSummary" p
        WHERE p."PlayerKey" = $1
        LIMIT 1
        "#,
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
