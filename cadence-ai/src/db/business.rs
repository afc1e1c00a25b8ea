//! business_records table operations

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use cadence_common::{Error, Result};

use crate::models::{BusinessKind, BusinessRecord};

/// Insert one business record
pub async fn insert_record(pool: &SqlitePool, record: &BusinessRecord) -> Result<()> {
    let id = record.id.to_string();
    let analysis = serde_json::to_string(&record.analysis)?;
    let metadata = serde_json::to_string(&record.metadata)?;
    let created_at = record.created_at.to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO business_records (
            id, kind, title, content, analysis, metadata, raw_response, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(record.kind.as_str())
    .bind(&record.title)
    .bind(&record.content)
    .bind(&analysis)
    .bind(&metadata)
    .bind(&record.raw_response)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load one business record by id
pub async fn get_record(pool: &SqlitePool, id: Uuid) -> Result<Option<BusinessRecord>> {
    let row = sqlx::query(
        r#"
        SELECT id, kind, title, content, analysis, metadata, raw_response, created_at
        FROM business_records WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: String = row.get("id");
    let kind: String = row.get("kind");
    let analysis: String = row.get("analysis");
    let metadata: String = row.get("metadata");
    let created_at: String = row.get("created_at");

    Ok(Some(BusinessRecord {
        id: Uuid::parse_str(&id)
            .map_err(|e| Error::Internal(format!("Invalid record id {}: {}", id, e)))?,
        kind: parse_kind(&kind)?,
        title: row.get("title"),
        content: row.get("content"),
        analysis: serde_json::from_str(&analysis)?,
        metadata: serde_json::from_str(&metadata)?,
        raw_response: row.get("raw_response"),
        created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::Internal(format!("Invalid created_at: {}", e)))?
            .with_timezone(&chrono::Utc),
    }))
}

fn parse_kind(kind: &str) -> Result<BusinessKind> {
    match kind {
        "pitch" => Ok(BusinessKind::Pitch),
        "contract" => Ok(BusinessKind::Contract),
        "venue" => Ok(BusinessKind::Venue),
        "contact" => Ok(BusinessKind::Contact),
        other => Err(Error::Internal(format!(
            "Unknown business kind in database: {}",
            other
        ))),
    }
}
