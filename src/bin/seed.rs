//! Seed script for development: loads the sample warehouse into a database.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env). Existing
//! fixture tables are dropped and recreated.

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = football_stats::db::create_pool(&db_url, 2).await?;

    println!("=== Football Stats Seed Script ===");

    football_stats::db::load_fixture(&pool).await?;
    report_counts(&pool).await?;

    println!("\n=== Seed complete! ===");
    Ok(())
}

async fn report_counts(pool: &PgPool) -> anyhow::Result<()> {
    for view in [
        "v_LeagueSummary",
        "v_TeamSquad",
        "v_PlayerSummary",
        "v_GoalkeeperSummary",
    ] {
        let count: i64 = sqlx::query_scalar(&format!(r#"SELECT COUNT(*) FROM "{view}""#))
            .fetch_one(pool)
            .await?;
        println!("[done] {view}: {count} rows");
    }
    Ok(())
}
