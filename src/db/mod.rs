//! Database connection pool and warehouse fixture utilities.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Development stand-in for the warehouse: tables named after the four views,
/// with a small sample of rows.
pub const WAREHOUSE_FIXTURE: &str = include_str!("../../fixtures/warehouse.sql");

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create a pool that only connects on first use.
///
/// The server starts even when the warehouse is down; each request surfaces
/// the connection failure on its own.
pub fn create_lazy_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}

/// Drop and recreate the fixture tables, then load the sample rows.
pub async fn load_fixture(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(WAREHOUSE_FIXTURE).execute(pool).await?;
    Ok(())
}
