//! Database access for cadence-ai
//!
//! One SQLite database holds the three create-only analysis tables. All JSON
//! payloads (insights, analysis blobs, metadata, key points) are serialized
//! to TEXT columns; timestamps are RFC 3339 TEXT; ids are uuid strings.

pub mod analysis;
pub mod business;
pub mod meetings;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Opens (or creates) the database file and runs table migrations.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;
    init_tables(&pool).await?;

    Ok(pool)
}

/// Create cadence-ai tables if they don't exist
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analysis_records (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            platform TEXT NOT NULL,
            sentiment_score REAL NOT NULL,
            sentiment_label TEXT NOT NULL,
            insights TEXT NOT NULL,
            raw_response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS business_records (
            id TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            analysis TEXT NOT NULL,
            metadata TEXT NOT NULL DEFAULT '{}',
            raw_response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meeting_summaries (
            id TEXT PRIMARY KEY,
            meeting_id TEXT,
            transcript TEXT NOT NULL,
            key_points TEXT NOT NULL,
            summary TEXT NOT NULL,
            raw_response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!(
        "Database tables initialized (analysis_records, business_records, meeting_summaries)"
    );

    Ok(())
}
