//! Business API handlers
//!
//! POST /api/business/pitch    - pitch analysis
//! POST /api/business/contract - contract summary
//! POST /api/business/contact  - contact insight
//! POST /api/business/venue    - venue suggestion
//!
//! Each call persists one business_records row with the task-specific
//! analysis blob, a metadata bag, and the verbatim raw provider response.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use cadence_common::events::CadenceEvent;

use crate::{
    api::{require, Envelope},
    db,
    error::{ApiError, ApiResult},
    models::{BusinessKind, BusinessRecord},
    provider::{Outcome, TaskKind},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PitchRequest {
    pub pitch: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContractRequest {
    pub content: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContextRequest {
    pub context: Option<String>,
    pub title: Option<String>,
}

/// Persist one business record and emit the completion event
async fn persist_business<T: Serialize>(
    state: &AppState,
    kind: BusinessKind,
    task: TaskKind,
    title: String,
    content: String,
    outcome: &Outcome<T>,
) -> Result<Uuid, ApiError> {
    let analysis = serde_json::to_value(&outcome.value)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize analysis: {}", e)))?;

    let record = BusinessRecord {
        id: Uuid::new_v4(),
        kind,
        title,
        content,
        analysis,
        metadata: json!({
            "task": task.label(),
            "source": outcome.source.label(),
        }),
        raw_response: outcome.raw_response.clone(),
        created_at: Utc::now(),
    };
    db::business::insert_record(&state.db, &record).await?;

    state.event_bus.emit(CadenceEvent::AnalysisCompleted {
        record_id: Some(record.id),
        task: task.label().to_string(),
        source: outcome.source.label().to_string(),
        timestamp: Utc::now(),
    });

    Ok(record.id)
}

/// POST /api/business/pitch
pub async fn analyze_pitch(
    State(state): State<AppState>,
    Json(request): Json<PitchRequest>,
) -> ApiResult<Json<Envelope<crate::models::PitchAnalysis>>> {
    let pitch = require(request.pitch, "Pitch content is required")?;
    let title = request.title.unwrap_or_else(|| "Untitled pitch".to_string());

    let outcome = state.provider.analyze_pitch(&pitch).await;
    let record_id = persist_business(
        &state,
        BusinessKind::Pitch,
        TaskKind::PitchAnalysis,
        title,
        pitch,
        &outcome,
    )
    .await?;

    Ok(Json(Envelope::with_record(outcome.value, record_id)))
}

/// POST /api/business/contract
pub async fn summarize_contract(
    State(state): State<AppState>,
    Json(request): Json<ContractRequest>,
) -> ApiResult<Json<Envelope<crate::models::ContractSummary>>> {
    let content = require(request.content, "Contract content is required")?;
    let title = request
        .title
        .unwrap_or_else(|| "Untitled contract".to_string());

    let outcome = state.provider.summarize_contract(&content).await;
    let record_id = persist_business(
        &state,
        BusinessKind::Contract,
        TaskKind::ContractSummary,
        title,
        content,
        &outcome,
    )
    .await?;

    Ok(Json(Envelope::with_record(outcome.value, record_id)))
}

/// POST /api/business/contact
pub async fn contact_insight(
    State(state): State<AppState>,
    Json(request): Json<ContextRequest>,
) -> ApiResult<Json<Envelope<crate::models::ContactInsight>>> {
    let context = require(request.context, "Contact context is required")?;
    let title = request
        .title
        .unwrap_or_else(|| "Untitled contact".to_string());

    let outcome = state.provider.contact_insight(&context).await;
    let record_id = persist_business(
        &state,
        BusinessKind::Contact,
        TaskKind::ContactInsight,
        title,
        context,
        &outcome,
    )
    .await?;

    Ok(Json(Envelope::with_record(outcome.value, record_id)))
}

/// POST /api/business/venue
pub async fn suggest_venues(
    State(state): State<AppState>,
    Json(request): Json<ContextRequest>,
) -> ApiResult<Json<Envelope<crate::models::VenueSuggestion>>> {
    let context = require(request.context, "Venue context is required")?;
    let title = request
        .title
        .unwrap_or_else(|| "Venue suggestion".to_string());

    let outcome = state.provider.suggest_venues(&context).await;
    let record_id = persist_business(
        &state,
        BusinessKind::Venue,
        TaskKind::VenueSuggestion,
        title,
        context,
        &outcome,
    )
    .await?;

    Ok(Json(Envelope::with_record(outcome.value, record_id)))
}

/// Build business routes
pub fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/business/pitch", post(analyze_pitch))
        .route("/business/contract", post(summarize_contract))
        .route("/business/contact", post(contact_insight))
        .route("/business/venue", post(suggest_venues))
}
