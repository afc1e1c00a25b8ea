//! Generative-language provider client
//!
//! Calls the Gemini `generateContent` endpoint with a fixed per-task prompt,
//! pulls the first candidate's text, extracts the first JSON object from it,
//! and decodes that into the task's output type. Every failure along that
//! path collapses to the task's fallback value; the failure kind is logged
//! and carried on the outcome's source tag.
//!
//! No retry, no backoff, no caching: one outbound call per invocation with a
//! fixed timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{extract, fallback, prompts, InsightProvider, Outcome, ProviderError, Source, TaskKind};
use crate::models::{
    ContactInsight, ContentAnalysis, ContractSummary, PitchAnalysis, QuestionSet, TopicResearch,
    VenueSuggestion,
};

/// Generative-language API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when none is configured
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Fixed timeout for provider requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

/// Key-point extraction wire shape (the output type is the bare list)
#[derive(Debug, Serialize, Deserialize)]
struct KeyPointsDto {
    #[serde(rename = "keyPoints")]
    key_points: Vec<String>,
}

/// Gemini-backed insight provider
///
/// Constructed once at startup and injected into `AppState`. An absent API
/// key is a valid configuration: the service still answers every request,
/// from fallbacks.
pub struct GeminiProvider {
    http_client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            model,
        }
    }

    /// Whether a real provider call will be attempted
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one prompt and return the first candidate's text verbatim
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::NotConfigured)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            API_BASE_URL, self.model, api_key
        );
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http_client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(text)
    }

    /// Generate, extract, and decode one task response
    async fn generate_value<T: DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<(T, String), ProviderError> {
        let raw = self.generate_text(prompt).await?;
        let json = extract::first_json_object(&raw).ok_or(ProviderError::NoJsonObject)?;
        let value = serde_json::from_str(json)?;
        Ok((value, raw))
    }

    /// Run one task with the fallback-on-any-failure policy
    async fn run<T>(&self, task: TaskKind, prompt: String, fallback: fn() -> T) -> Outcome<T>
    where
        T: DeserializeOwned + Serialize,
    {
        match self.generate_value::<T>(&prompt).await {
            Ok((value, raw_response)) => {
                debug!(task = task.label(), "Provider task completed");
                Outcome {
                    value,
                    source: Source::Model,
                    raw_response,
                }
            }
            Err(err) => {
                warn!(
                    task = task.label(),
                    kind = err.kind(),
                    error = %err,
                    "Provider task failed; substituting fallback"
                );
                let value = fallback();
                let raw_response = serde_json::to_string(&value).unwrap_or_default();
                Outcome {
                    value,
                    source: Source::Fallback(err.kind()),
                    raw_response,
                }
            }
        }
    }
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    async fn analyze_content(
        &self,
        content: &str,
        platform: Option<&str>,
    ) -> Outcome<ContentAnalysis> {
        let prompt = prompts::content_analysis(content, platform);
        self.run(TaskKind::ContentAnalysis, prompt, fallback::content_analysis)
            .await
    }

    async fn generate_questions(
        &self,
        context: &str,
        style: Option<&str>,
    ) -> Outcome<QuestionSet> {
        let prompt = prompts::question_generation(context, style);
        self.run(TaskKind::QuestionGeneration, prompt, fallback::question_set)
            .await
    }

    async fn extract_key_points(&self, transcript: &str) -> Outcome<Vec<String>> {
        let prompt = prompts::key_point_extraction(transcript);
        self.run(TaskKind::KeyPointExtraction, prompt, || KeyPointsDto {
            key_points: fallback::key_points(),
        })
        .await
        .map(|dto| dto.key_points)
    }

    async fn research_topic(&self, topic: &str) -> Outcome<TopicResearch> {
        let prompt = prompts::topic_research(topic);
        self.run(TaskKind::TopicResearch, prompt, fallback::topic_research)
            .await
    }

    async fn analyze_pitch(&self, pitch: &str) -> Outcome<PitchAnalysis> {
        let prompt = prompts::pitch_analysis(pitch);
        self.run(TaskKind::PitchAnalysis, prompt, fallback::pitch_analysis)
            .await
    }

    async fn summarize_contract(&self, content: &str) -> Outcome<ContractSummary> {
        let prompt = prompts::contract_summary(content);
        self.run(TaskKind::ContractSummary, prompt, fallback::contract_summary)
            .await
    }

    async fn contact_insight(&self, context: &str) -> Outcome<ContactInsight> {
        let prompt = prompts::contact_insight(context);
        self.run(TaskKind::ContactInsight, prompt, fallback::contact_insight)
            .await
    }

    async fn suggest_venues(&self, context: &str) -> Outcome<VenueSuggestion> {
        let prompt = prompts::venue_suggestion(context);
        self.run(TaskKind::VenueSuggestion, prompt, fallback::venue_suggestion)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // An unconfigured provider never leaves the process: every task answers
    // with its fallback, tagged not_configured.
    #[tokio::test]
    async fn unconfigured_provider_falls_back() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL.to_string());
        assert!(!provider.is_configured());

        let outcome = provider.analyze_content("We shipped it!", None).await;
        assert_eq!(outcome.source, Source::Fallback("not_configured"));
        assert_eq!(outcome.value, fallback::content_analysis());
        assert!(!outcome.raw_response.is_empty());
    }

    #[tokio::test]
    async fn unconfigured_fallback_is_idempotent() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL.to_string());

        let first = provider.analyze_pitch("We sell rocks.").await;
        let second = provider.analyze_pitch("We sell rocks.").await;
        assert_eq!(first.value, second.value);
        assert_eq!(first.source, second.source);
    }

    #[tokio::test]
    async fn key_points_fallback_unwraps_to_list() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL.to_string());
        let outcome = provider.extract_key_points("a long transcript").await;
        assert!(outcome.source.is_fallback());
        assert_eq!(outcome.value, fallback::key_points());
    }
}
