//! meeting_summaries table operations

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use cadence_common::{Error, Result};

use crate::models::MeetingSummary;

/// Insert one meeting summary
pub async fn insert_summary(pool: &SqlitePool, summary: &MeetingSummary) -> Result<()> {
    let id = summary.id.to_string();
    let meeting_id = summary.meeting_id.map(|id| id.to_string());
    let key_points = serde_json::to_string(&summary.key_points)?;
    let created_at = summary.created_at.to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO meeting_summaries (
            id, meeting_id, transcript, key_points, summary, raw_response, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&meeting_id)
    .bind(&summary.transcript)
    .bind(&key_points)
    .bind(&summary.summary)
    .bind(&summary.raw_response)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load one meeting summary by id
pub async fn get_summary(pool: &SqlitePool, id: Uuid) -> Result<Option<MeetingSummary>> {
    let row = sqlx::query(
        r#"
        SELECT id, meeting_id, transcript, key_points, summary, raw_response, created_at
        FROM meeting_summaries WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: String = row.get("id");
    let meeting_id: Option<String> = row.get("meeting_id");
    let key_points: String = row.get("key_points");
    let created_at: String = row.get("created_at");

    let meeting_id = match meeting_id {
        Some(raw) => Some(
            Uuid::parse_str(&raw)
                .map_err(|e| Error::Internal(format!("Invalid meeting id {}: {}", raw, e)))?,
        ),
        None => None,
    };

    Ok(Some(MeetingSummary {
        id: Uuid::parse_str(&id)
            .map_err(|e| Error::Internal(format!("Invalid record id {}: {}", id, e)))?,
        meeting_id,
        transcript: row.get("transcript"),
        key_points: serde_json::from_str(&key_points)?,
        summary: row.get("summary"),
        raw_response: row.get("raw_response"),
        created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::Internal(format!("Invalid created_at: {}", e)))?
            .with_timezone(&chrono::Utc),
    }))
}
