//! API gateway integration tests
//!
//! Exercises build_router end to end with an in-memory database and a
//! scripted fake provider: required-field validation, success envelopes,
//! fallback-on-provider-failure, persistence, and the /api rate limit.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use async_trait::async_trait;
use cadence_ai::models::{
    ContactInsight, ContentAnalysis, ContractSummary, Insight, PitchAnalysis, QuestionSet,
    Sentiment, SentimentLabel, TopicResearch, VenueSuggestion,
};
use cadence_ai::provider::{fallback, InsightProvider, Outcome, Source};
use cadence_ai::{build_router, AppState};
use cadence_common::events::EventBus;

/// Scripted provider: either answers like a healthy model or fails every
/// call the way the real adapter does (fallback value, fallback source).
#[derive(Clone, Copy)]
enum FakeMode {
    Model,
    Failing,
}

struct FakeProvider {
    mode: FakeMode,
}

fn model_outcome<T: serde::Serialize>(value: T) -> Outcome<T> {
    let raw = format!(
        "Here is the analysis:\n{}",
        serde_json::to_string(&value).unwrap()
    );
    Outcome {
        value,
        source: Source::Model,
        raw_response: raw,
    }
}

fn failing_outcome<T: serde::Serialize>(value: T) -> Outcome<T> {
    let raw = serde_json::to_string(&value).unwrap();
    Outcome {
        value,
        source: Source::Fallback("request"),
        raw_response: raw,
    }
}

fn model_content_analysis() -> ContentAnalysis {
    ContentAnalysis {
        sentiment: Sentiment {
            label: SentimentLabel::Positive,
            confidence: 87.0,
        },
        insights: vec![Insight {
            icon: "🚀".to_string(),
            title: "Strong launch reception".to_string(),
            text: "Customers responded enthusiastically to the release.".to_string(),
        }],
        suggested_actions: vec!["Follow up with the most engaged customers".to_string()],
        trend_analysis: "Engagement is trending upward after the launch.".to_string(),
        network_opportunities: vec!["Share the launch story with partners".to_string()],
    }
}

#[async_trait]
impl InsightProvider for FakeProvider {
    async fn analyze_content(&self, _: &str, _: Option<&str>) -> Outcome<ContentAnalysis> {
        match self.mode {
            FakeMode::Model => model_outcome(model_content_analysis()),
            FakeMode::Failing => failing_outcome(fallback::content_analysis()),
        }
    }

    async fn generate_questions(&self, _: &str, _: Option<&str>) -> Outcome<QuestionSet> {
        match self.mode {
            FakeMode::Model => model_outcome(QuestionSet {
                professional: vec!["What is your current roadmap?".to_string()],
                social: vec!["How was your week?".to_string()],
                humorous: vec!["Worst meeting ever?".to_string()],
            }),
            FakeMode::Failing => failing_outcome(fallback::question_set()),
        }
    }

    async fn extract_key_points(&self, _: &str) -> Outcome<Vec<String>> {
        match self.mode {
            FakeMode::Model => model_outcome(vec![
                "Budget approved for Q3".to_string(),
                "Hiring freeze lifted".to_string(),
            ]),
            FakeMode::Failing => failing_outcome(fallback::key_points()),
        }
    }

    async fn research_topic(&self, _: &str) -> Outcome<TopicResearch> {
        match self.mode {
            FakeMode::Model => model_outcome(TopicResearch {
                overview: "A fast-moving sector.".to_string(),
                talking_points: vec!["Recent funding rounds".to_string()],
                recent_developments: vec!["New entrants this quarter".to_string()],
                questions: vec!["How are you positioned?".to_string()],
            }),
            FakeMode::Failing => failing_outcome(fallback::topic_research()),
        }
    }

    async fn analyze_pitch(&self, _: &str) -> Outcome<PitchAnalysis> {
        match self.mode {
            FakeMode::Model => model_outcome(PitchAnalysis {
                strengths: vec!["Clear market need".to_string()],
                concerns: vec!["Crowded space".to_string()],
                recommendations: vec!["Sharpen differentiation".to_string()],
                investment_potential: 72.0,
                summary: "Promising pitch with execution risk.".to_string(),
            }),
            FakeMode::Failing => failing_outcome(fallback::pitch_analysis()),
        }
    }

    async fn summarize_contract(&self, _: &str) -> Outcome<ContractSummary> {
        match self.mode {
            FakeMode::Model => model_outcome(ContractSummary {
                key_terms: vec!["12-month term".to_string()],
                obligations: vec!["Monthly reporting".to_string()],
                risks: vec!["Unlimited liability clause".to_string()],
                summary: "Standard services agreement with one risky clause.".to_string(),
            }),
            FakeMode::Failing => failing_outcome(fallback::contract_summary()),
        }
    }

    async fn contact_insight(&self, _: &str) -> Outcome<ContactInsight> {
        match self.mode {
            FakeMode::Model => model_outcome(ContactInsight {
                talking_points: vec!["Their recent promotion".to_string()],
                ice_breakers: vec!["Congrats on the new role!".to_string()],
                meeting_strategy: "Lead with their priorities.".to_string(),
            }),
            FakeMode::Failing => failing_outcome(fallback::contact_insight()),
        }
    }

    async fn suggest_venues(&self, _: &str) -> Outcome<VenueSuggestion> {
        match self.mode {
            FakeMode::Model => model_outcome(fallback::venue_suggestion()),
            FakeMode::Failing => failing_outcome(fallback::venue_suggestion()),
        }
    }
}

/// Build a test app with in-memory database and the given provider mode
async fn test_app(mode: FakeMode) -> (Router, SqlitePool) {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    cadence_ai::db::init_tables(&pool).await.unwrap();

    let state = AppState::new(
        pool.clone(),
        Arc::new(FakeProvider { mode }),
        EventBus::new(100),
        "test".to_string(),
    );
    (build_router(state), pool)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_status_uptime_environment() {
    let (app, _pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert!(body["uptime"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn every_endpoint_rejects_missing_required_field() {
    let cases = [
        ("/api/analysis/content", "Content is required"),
        ("/api/analysis/sentiment", "Content is required"),
        ("/api/analysis/insights", "Content is required"),
        ("/api/meeting/questions", "Context is required"),
        ("/api/meeting/keypoints", "Transcript is required"),
        ("/api/meeting/summarize", "Transcript is required"),
        ("/api/meeting/research", "Topic is required"),
        ("/api/business/pitch", "Pitch content is required"),
        ("/api/business/contract", "Contract content is required"),
        ("/api/business/contact", "Contact context is required"),
        ("/api/business/venue", "Venue context is required"),
    ];

    for (uri, message) in cases {
        let (app, _pool) = test_app(FakeMode::Model).await;
        let response = app.oneshot(post_json(uri, json!({}))).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{} should reject an empty body",
            uri
        );

        let body = body_json(response).await;
        assert_eq!(body["error"], message, "unexpected error for {}", uri);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn blank_required_field_is_rejected() {
    let (app, _pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(post_json(
            "/api/meeting/keypoints",
            json!({"transcript": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Transcript is required");
}

#[tokio::test]
async fn sentiment_returns_labelled_confidence_without_record() {
    let (app, _pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(post_json(
            "/api/analysis/sentiment",
            json!({"content": "We shipped the feature and customers love it!"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let label = body["data"]["sentiment"]["type"].as_str().unwrap();
    assert!(["positive", "neutral", "negative"].contains(&label));
    let confidence = body["data"]["sentiment"]["confidence"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&confidence));
    // Compute-only endpoint: no recordId
    assert!(body.get("recordId").is_none());
}

#[tokio::test]
async fn content_analysis_persists_record_with_raw_response() {
    let (app, pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(post_json(
            "/api/analysis/content",
            json!({"content": "Great quarter for the team", "platform": "linkedin"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let record_id = Uuid::parse_str(body["recordId"].as_str().unwrap()).unwrap();

    let record = cadence_ai::db::analysis::get_record(&pool, record_id)
        .await
        .unwrap()
        .expect("persisted analysis record");
    assert_eq!(record.content, "Great quarter for the team");
    assert_eq!(record.platform, "linkedin");
    assert!(!record.raw_response.is_empty());
    assert_eq!(record.sentiment_label, SentimentLabel::Positive);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analysis_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn identical_requests_create_duplicate_rows() {
    let (app, pool) = test_app(FakeMode::Model).await;
    let body = json!({"content": "same content twice"});

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/api/analysis/content", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analysis_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn summarize_persists_keypoint_concatenation() {
    let (app, pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(post_json(
            "/api/meeting/summarize",
            json!({"transcript": "Long discussion about budget and hiring."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["data"]["summary"],
        "Budget approved for Q3\nHiring freeze lifted"
    );
    let record_id = Uuid::parse_str(body["recordId"].as_str().unwrap()).unwrap();

    let summary = cadence_ai::db::meetings::get_summary(&pool, record_id)
        .await
        .unwrap()
        .expect("persisted meeting summary");
    assert_eq!(summary.key_points.len(), 2);
    assert_eq!(summary.summary, "Budget approved for Q3\nHiring freeze lifted");
    assert!(!summary.raw_response.is_empty());
}

#[tokio::test]
async fn pitch_failure_returns_fallback_not_500() {
    let (app, pool) = test_app(FakeMode::Failing).await;

    let response = app
        .oneshot(post_json(
            "/api/business/pitch",
            json!({"pitch": "We connect dog walkers with busy owners."}),
        ))
        .await
        .unwrap();
    // Provider failure never surfaces as an HTTP error
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        serde_json::to_value(fallback::pitch_analysis()).unwrap()
    );

    let record_id = Uuid::parse_str(body["recordId"].as_str().unwrap()).unwrap();
    let record = cadence_ai::db::business::get_record(&pool, record_id)
        .await
        .unwrap()
        .expect("persisted business record");
    assert!(!record.raw_response.is_empty());
    assert_eq!(record.metadata["source"], "fallback");
    assert_eq!(record.metadata["task"], "pitch_analysis");
}

#[tokio::test]
async fn failing_provider_yields_identical_fallbacks() {
    let (app, _pool) = test_app(FakeMode::Failing).await;
    let body = json!({"content": "anything at all"});

    let first = body_json(
        app.clone()
            .oneshot(post_json("/api/analysis/insights", body.clone()))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(post_json("/api/analysis/insights", body))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn business_contract_and_contact_persist_their_kind() {
    let (app, pool) = test_app(FakeMode::Model).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/business/contract",
            json!({"content": "This agreement is made between...", "title": "MSA"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json(
            "/api/business/contact",
            json!({"context": "VP of Engineering, met at conference"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let kinds: Vec<String> =
        sqlx::query_scalar("SELECT kind FROM business_records ORDER BY kind")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(kinds, vec!["contact".to_string(), "contract".to_string()]);
}

#[tokio::test]
async fn api_rate_limit_returns_429_after_window() {
    let (app, _pool) = test_app(FakeMode::Model).await;

    for i in 0..100 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "request {} in window", i);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Too many requests");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _pool) = test_app(FakeMode::Model).await;

    let response = app
        .oneshot(post_json("/api/analysis/unknown", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_event_is_broadcast() {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    cadence_ai::db::init_tables(&pool).await.unwrap();

    let event_bus = EventBus::new(100);
    let mut rx = event_bus.subscribe();
    let state = AppState::new(
        pool,
        Arc::new(FakeProvider {
            mode: FakeMode::Model,
        }),
        event_bus,
        "test".to_string(),
    );
    let app = build_router(state);

    let response = app
        .oneshot(post_json(
            "/api/analysis/sentiment",
            json!({"content": "event please"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let event = rx.recv().await.unwrap();
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "AnalysisCompleted");
    assert_eq!(value["task"], "content_analysis");
    assert_eq!(value["source"], "model");
    assert!(value["record_id"].is_null());
}
