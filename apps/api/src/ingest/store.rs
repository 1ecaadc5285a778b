//! Posting persistence: a replace-all refresh plus filtered reads.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::posting::{JobPosting, JobPostingRow};

/// Creates the jobs table if it is not present. Called once at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            company TEXT NOT NULL,
            location TEXT NOT NULL,
            description TEXT NOT NULL,
            salary TEXT,
            source TEXT,
            apply_link TEXT,
            fetched_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Postings table ensured");
    Ok(())
}

/// Replaces the stored postings with a fresh batch, in one transaction so
/// readers never observe a half-refreshed set.
pub async fn replace_all(pool: &PgPool, postings: &[JobPosting]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?;

    let mut stored = 0u64;
    for posting in postings {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, company, location, description, salary, source, apply_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&posting.title)
        .bind(&posting.company)
        .bind(&posting.location)
        .bind(&posting.description)
        .bind(&posting.salary)
        .bind(&posting.source)
        .bind(&posting.apply_link)
        .execute(&mut *tx)
        .await?;
        stored += 1;
    }

    tx.commit().await?;
    info!("{stored} postings stored");
    Ok(stored)
}

/// All stored postings, newest first.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<JobPostingRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM jobs ORDER BY fetched_at DESC, title")
        .fetch_all(pool)
        .await
}

/// Stored postings narrowed by optional filters. Filters combine with AND;
/// the text filters are case-insensitive containment. `search` looks at
/// title and description.
pub async fn fetch_filtered(
    pool: &PgPool,
    location: Option<&str>,
    source: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<JobPostingRow>, sqlx::Error> {
    let mut builder: sqlx::QueryBuilder<sqlx::Postgres> =
        sqlx::QueryBuilder::new("SELECT * FROM jobs WHERE TRUE");

    if let Some(location) = location {
        builder
            .push(" AND location ILIKE ")
            .push_bind(format!("%{location}%"));
    }
    if let Some(source) = source {
        builder.push(" AND source = ").push_bind(source.to_string());
    }
    if let Some(search) = search {
        let pattern = format!("%{search}%");
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY fetched_at DESC, title");
    builder.build_query_as().fetch_all(pool).await
}
