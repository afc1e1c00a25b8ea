//! Content analysis API handlers
//!
//! POST /api/analysis/content   - full analysis, persisted
//! POST /api/analysis/sentiment - sentiment only, compute-only
//! POST /api/analysis/insights  - insight list only, compute-only

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cadence_common::events::CadenceEvent;

use crate::{
    api::{require, Envelope},
    db,
    error::ApiResult,
    models::{AnalysisRecord, ContentAnalysis, Insight, Sentiment},
    provider::TaskKind,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentData {
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize)]
pub struct InsightsData {
    pub insights: Vec<Insight>,
}

/// POST /api/analysis/content
///
/// Full content analysis, persisted as one analysis_records row. The stored
/// row keeps the verbatim raw provider response alongside the parsed fields.
pub async fn analyze_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> ApiResult<Json<Envelope<ContentAnalysis>>> {
    let content = require(request.content, "Content is required")?;
    let platform = request.platform.unwrap_or_else(|| "general".to_string());

    let outcome = state
        .provider
        .analyze_content(&content, Some(platform.as_str()))
        .await;

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        content,
        platform,
        sentiment_score: outcome.value.sentiment.confidence,
        sentiment_label: outcome.value.sentiment.label,
        insights: outcome.value.insights.clone(),
        raw_response: outcome.raw_response.clone(),
        created_at: Utc::now(),
    };
    db::analysis::insert_record(&state.db, &record).await?;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: Some(record.id),
        task: TaskKind::ContentAnalysis.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::with_record(outcome.value, record.id)))
}

/// POST /api/analysis/sentiment
///
/// Sentiment-only projection of a content analysis. Compute-only: no row is
/// written and no recordId is returned.
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> ApiResult<Json<Envelope<SentimentData>>> {
    let content = require(request.content, "Content is required")?;

    let outcome = state
        .provider
        .analyze_content(&content, request.platform.as_deref())
        .await;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: None,
        task: TaskKind::ContentAnalysis.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::new(SentimentData {
        sentiment: outcome.value.sentiment,
    })))
}

/// POST /api/analysis/insights
///
/// Insight-list projection of a content analysis. Compute-only.
pub async fn extract_insights(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> ApiResult<Json<Envelope<InsightsData>>> {
    let content = require(request.content, "Content is required")?;

    let outcome = state
        .provider
        .analyze_content(&content, request.platform.as_deref())
        .await;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: None,
        task: TaskKind::ContentAnalysis.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::new(InsightsData {
        insights: outcome.value.insights,
    })))
}

/// Build content analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analysis/content", post(analyze_content))
        .route("/analysis/sentiment", post(analyze_sentiment))
        .route("/analysis/insights", post(extract_insights))
}
