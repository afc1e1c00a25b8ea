//! Meeting API handlers
//!
//! POST /api/meeting/questions - question generation, compute-only
//! POST /api/meeting/keypoints - key-point extraction, compute-only
//! POST /api/meeting/summarize - transcript summary, persisted
//! POST /api/meeting/research  - topic research, compute-only

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cadence_common::events::CadenceEvent;

use crate::{
    api::{require, Envelope},
    db,
    error::ApiResult,
    models::{MeetingSummary, QuestionSet, TopicResearch},
    provider::TaskKind,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub context: Option<String>,
    /// Requested question style ("professional", "social", "humorous")
    #[serde(rename = "type")]
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub transcript: Option<String>,
    #[serde(rename = "meetingId")]
    pub meeting_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPointsData {
    pub key_points: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub key_points: Vec<String>,
    /// Newline concatenation of the key points
    pub summary: String,
}

/// POST /api/meeting/questions
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> ApiResult<Json<Envelope<QuestionSet>>> {
    let context = require(request.context, "Context is required")?;

    let outcome = state
        .provider
        .generate_questions(&context, request.style.as_deref())
        .await;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: None,
        task: TaskKind::QuestionGeneration.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::new(outcome.value)))
}

/// POST /api/meeting/keypoints
pub async fn extract_key_points(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequest>,
) -> ApiResult<Json<Envelope<KeyPointsData>>> {
    let transcript = require(request.transcript, "Transcript is required")?;

    let outcome = state.provider.extract_key_points(&transcript).await;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: None,
        task: TaskKind::KeyPointExtraction.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::new(KeyPointsData {
        key_points: outcome.value,
    })))
}

/// POST /api/meeting/summarize
///
/// Extracts key points, derives the summary as their newline concatenation,
/// and persists one meeting_summaries row. Written once per call; the owning
/// meeting's lifecycle is managed elsewhere.
pub async fn summarize_transcript(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequest>,
) -> ApiResult<Json<Envelope<SummaryData>>> {
    let transcript = require(request.transcript, "Transcript is required")?;

    let outcome = state.provider.extract_key_points(&transcript).await;
    let summary_text = outcome.value.join("\n");

    let summary = MeetingSummary {
        id: Uuid::new_v4(),
        meeting_id: request.meeting_id,
        transcript,
        key_points: outcome.value.clone(),
        summary: summary_text.clone(),
        raw_response: outcome.raw_response.clone(),
        created_at: Utc::now(),
    };
    db::meetings::insert_summary(&state.db, &summary).await?;

    state.event_bus.emit(CadenceEvent::MeetingSummarized {
        summary_id: summary.id,
        meeting_id: summary.meeting_id,
        key_point_count: summary.key_points.len(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::with_record(
        SummaryData {
            key_points: outcome.value,
            summary: summary_text,
        },
        summary.id,
    )))
}

/// POST /api/meeting/research
pub async fn research_topic(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> ApiResult<Json<Envelope<TopicResearch>>> {
    let topic = require(request.topic, "Topic is required")?;

    let outcome = state.provider.research_topic(&topic).await;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: None,
        task: TaskKind::TopicResearch.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(Json(Envelope::new(outcome.value)))
}

/// Build meeting routes
pub fn meeting_routes() -> Router<AppState> {
    Router::new()
        .route("/meeting/questions", post(generate_questions))
        .route("/meeting/keypoints", post(extract_key_points))
        .route("/meeting/summarize", post(summarize_transcript))
        .route("/meeting/research", post(research_topic))
}
