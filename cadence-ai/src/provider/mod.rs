//! Provider adapter layer
//!
//! Turns a (text, task kind) pair into a structured result, tolerating an
//! unstructured and unreliable upstream text response. Any provider-level
//! failure is absorbed here and converted to the task's fixed fallback value;
//! the failure kind stays observable through [`ProviderError`] logging and the
//! [`Source`] tag on every outcome.

pub mod extract;
pub mod fallback;
pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ContactInsight, ContentAnalysis, ContractSummary, PitchAnalysis, QuestionSet, TopicResearch,
    VenueSuggestion,
};

pub use gemini::GeminiProvider;

/// Task selector for adapter invocations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    ContentAnalysis,
    QuestionGeneration,
    KeyPointExtraction,
    TopicResearch,
    PitchAnalysis,
    ContractSummary,
    ContactInsight,
    VenueSuggestion,
}

impl TaskKind {
    /// Stable label used in logs, events, and record metadata
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::ContentAnalysis => "content_analysis",
            TaskKind::QuestionGeneration => "question_generation",
            TaskKind::KeyPointExtraction => "key_point_extraction",
            TaskKind::TopicResearch => "topic_research",
            TaskKind::PitchAnalysis => "pitch_analysis",
            TaskKind::ContractSummary => "contract_summary",
            TaskKind::ContactInsight => "contact_insight",
            TaskKind::VenueSuggestion => "venue_suggestion",
        }
    }
}

/// Provider-level failure kinds
///
/// Each kind is distinct so logs and events can tell "provider unreachable"
/// from "provider answered with unparseable text". None of these propagate
/// past the adapter boundary: all collapse to the task's fallback value.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key configured; the adapter never attempts a call
    #[error("Provider not configured (missing API key)")]
    NotConfigured,

    /// Transport-level failure (DNS, connect, timeout)
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned a non-success HTTP status
    #[error("Provider returned status {0}")]
    Status(u16),

    /// Provider response contained no candidate text
    #[error("Provider response contained no text")]
    EmptyResponse,

    /// Candidate text contained no complete JSON object
    #[error("No JSON object found in provider response")]
    NoJsonObject,

    /// Extracted JSON object failed to decode into the task shape
    #[error("Failed to decode provider JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// Stable kind label for structured logging
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured => "not_configured",
            ProviderError::Request(_) => "request",
            ProviderError::Status(_) => "status",
            ProviderError::EmptyResponse => "empty_response",
            ProviderError::NoJsonObject => "no_json_object",
            ProviderError::Decode(_) => "decode",
        }
    }
}

/// Where an outcome's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Decoded from a real provider response
    Model,
    /// Fixed fallback, tagged with the failure kind that triggered it
    Fallback(&'static str),
}

impl Source {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Source::Fallback(_))
    }

    /// "model" or "fallback", for events and record metadata
    pub fn label(&self) -> &'static str {
        match self {
            Source::Model => "model",
            Source::Fallback(_) => "fallback",
        }
    }
}

/// Result of one adapter invocation
///
/// `raw_response` is the verbatim provider text when a call reached the
/// provider, or the serialized fallback value otherwise, so persistence
/// always has a non-empty raw field to store.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub value: T,
    pub source: Source,
    pub raw_response: String,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            source: self.source,
            raw_response: self.raw_response,
        }
    }
}

/// Insight provider abstraction
///
/// Constructor-injected into `AppState` so tests can substitute a scripted
/// fake. Implementations never return an error: failures surface as fallback
/// outcomes.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Analyze free-form content (posts, notes) for sentiment and insights
    async fn analyze_content(&self, content: &str, platform: Option<&str>)
        -> Outcome<ContentAnalysis>;

    /// Generate meeting questions for a context, optionally biased to a style
    async fn generate_questions(&self, context: &str, style: Option<&str>)
        -> Outcome<QuestionSet>;

    /// Extract ordered key points from a meeting transcript
    async fn extract_key_points(&self, transcript: &str) -> Outcome<Vec<String>>;

    /// Research a topic ahead of a meeting
    async fn research_topic(&self, topic: &str) -> Outcome<TopicResearch>;

    /// Analyze a startup/sales pitch
    async fn analyze_pitch(&self, pitch: &str) -> Outcome<PitchAnalysis>;

    /// Summarize contract text into terms, obligations, risks
    async fn summarize_contract(&self, content: &str) -> Outcome<ContractSummary>;

    /// Prepare talking points and strategy for meeting a contact
    async fn contact_insight(&self, context: &str) -> Outcome<ContactInsight>;

    /// Suggest meeting venues for a context
    async fn suggest_venues(&self, context: &str) -> Outcome<VenueSuggestion>;
}
