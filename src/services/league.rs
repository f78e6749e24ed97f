//! League summary queries.

use sqlx::PgPool;

use super::ViewRow;
use crate::errors::AppError;

/// Every row of `v_LeagueSummary`.
pub async fn list(pool: &PgPool) -> Result<Vec<ViewRow>, AppError> {
    let rows = sqlx::query_scalar::<_, ViewRow>(
        r#"SELECT to_jsonb(l) FROM "v_LeagueSummary" l"#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
