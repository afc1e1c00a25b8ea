//! analysis_records table operations

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use cadence_common::{Error, Result};

use crate::models::{AnalysisRecord, Insight, SentimentLabel};

/// Insert one analysis record
///
/// A single atomic insert; no update-in-place or upsert path exists.
pub async fn insert_record(pool: &SqlitePool, record: &AnalysisRecord) -> Result<()> {
    // Serialize JSON payloads before touching the pool
    let id = record.id.to_string();
    let insights = serde_json::to_string(&record.insights)?;
    let created_at = record.created_at.to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO analysis_records (
            id, content, platform, sentiment_score, sentiment_label,
            insights, raw_response, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&record.content)
    .bind(&record.platform)
    .bind(record.sentiment_score)
    .bind(record.sentiment_label.as_str())
    .bind(&insights)
    .bind(&record.raw_response)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load one analysis record by id
pub async fn get_record(pool: &SqlitePool, id: Uuid) -> Result<Option<AnalysisRecord>> {
    let row = sqlx::query(
        r#"
        SELECT id, content, platform, sentiment_score, sentiment_label,
               insights, raw_response, created_at
        FROM analysis_records WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: String = row.get("id");
    let sentiment_label: String = row.get("sentiment_label");
    let insights: String = row.get("insights");
    let created_at: String = row.get("created_at");

    let insights: Vec<Insight> = serde_json::from_str(&insights)?;
    let sentiment_label = parse_label(&sentiment_label)?;

    Ok(Some(AnalysisRecord {
        id: Uuid::parse_str(&id)
            .map_err(|e| Error::Internal(format!("Invalid record id {}: {}", id, e)))?,
        content: row.get("content"),
        platform: row.get("platform"),
        sentiment_score: row.get("sentiment_score"),
        sentiment_label,
        insights,
        raw_response: row.get("raw_response"),
        created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::Internal(format!("Invalid created_at: {}", e)))?
            .with_timezone(&chrono::Utc),
    }))
}

fn parse_label(label: &str) -> Result<SentimentLabel> {
    match label {
        "positive" => Ok(SentimentLabel::Positive),
        "neutral" => Ok(SentimentLabel::Neutral),
        "negative" => Ok(SentimentLabel::Negative),
        other => Err(Error::Internal(format!(
            "Unknown sentiment label in database: {}",
            other
        ))),
    }
}
