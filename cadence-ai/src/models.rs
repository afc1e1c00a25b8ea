//! Data models for cadence-ai
//!
//! Task output types mirror the JSON shapes requested from the provider
//! (camelCase on the wire, matching the product's API contract). Record types
//! map one adapter invocation onto one create-only storage row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentiment classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

/// Sentiment with a 0-100 confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(rename = "type")]
    pub label: SentimentLabel,
    pub confidence: f64,
}

/// A single insight card: icon, title, body text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub icon: String,
    pub title: String,
    pub text: String,
}

/// Full content-analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub sentiment: Sentiment,
    pub insights: Vec<Insight>,
    pub suggested_actions: Vec<String>,
    pub trend_analysis: String,
    pub network_opportunities: Vec<String>,
}

/// Generated meeting questions grouped by style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub professional: Vec<String>,
    pub social: Vec<String>,
    pub humorous: Vec<String>,
}

/// Topic research brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResearch {
    pub overview: String,
    pub talking_points: Vec<String>,
    pub recent_developments: Vec<String>,
    pub questions: Vec<String>,
}

/// Investor-style pitch analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchAnalysis {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    /// 0-100 score
    pub investment_potential: f64,
    pub summary: String,
}

/// Contract summary result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub key_terms: Vec<String>,
    pub obligations: Vec<String>,
    pub risks: Vec<String>,
    pub summary: String,
}

/// Pre-meeting contact insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInsight {
    pub talking_points: Vec<String>,
    pub ice_breakers: Vec<String>,
    pub meeting_strategy: String,
}

/// A suggested meeting venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
}

/// Venue suggestions for a meeting context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSuggestion {
    pub venues: Vec<Venue>,
    pub best_practices: Vec<String>,
}

/// Business record kind (pitch | contract | venue | contact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessKind {
    Pitch,
    Contract,
    Venue,
    Contact,
}

impl BusinessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessKind::Pitch => "pitch",
            BusinessKind::Contract => "contract",
            BusinessKind::Venue => "venue",
            BusinessKind::Contact => "contact",
        }
    }
}

/// One persisted content-analysis invocation
///
/// Create-only: rows are never updated or deleted, and repeated identical
/// requests create duplicate rows. The verbatim raw provider output is stored
/// alongside the interpreted fields so a downstream parsing failure never
/// loses the original signal.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub content: String,
    pub platform: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub insights: Vec<Insight>,
    pub raw_response: String,
    pub created_at: DateTime<Utc>,
}

/// One persisted business-analysis invocation (pitch/contract/contact/venue)
#[derive(Debug, Clone)]
pub struct BusinessRecord {
    pub id: Uuid,
    pub kind: BusinessKind,
    pub title: String,
    pub content: String,
    /// Task-specific analysis result, stored as an opaque structured blob
    pub analysis: serde_json::Value,
    /// Opaque key-value bag (task label, outcome source, hints)
    pub metadata: serde_json::Value,
    pub raw_response: String,
    pub created_at: DateTime<Utc>,
}

/// One persisted meeting summarization
#[derive(Debug, Clone)]
pub struct MeetingSummary {
    pub id: Uuid,
    pub meeting_id: Option<Uuid>,
    pub transcript: String,
    pub key_points: Vec<String>,
    /// Newline concatenation of `key_points`
    pub summary: String,
    pub raw_response: String,
    pub created_at: DateTime<Utc>,
}
