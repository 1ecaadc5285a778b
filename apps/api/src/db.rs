use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the connection pool for the postings store.
/// Pool size comes from `DB_MAX_CONNECTIONS` (via `Config`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to the postings database...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("Postings database pool ready (max {max_connections} connections)");
    Ok(pool)
}
