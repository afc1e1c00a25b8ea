//! cadence-ai - AI Insight Microservice
//!
//! HTTP gateway over the generative-language provider adapter: validates
//! request bodies, invokes the adapter, persists results, and shapes the
//! JSON response envelope. Library interface exposed for integration tests.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod provider;
pub mod rate_limit;

pub use crate::error::{ApiError, ApiResult};

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use cadence_common::events::EventBus;

use crate::provider::InsightProvider;
use crate::rate_limit::ApiRateLimiter;

/// Application state shared across handlers
///
/// The provider is an injected trait object, never a module-level singleton,
/// so tests substitute a scripted fake.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Insight provider adapter
    pub provider: Arc<dyn InsightProvider>,
    /// Event bus for SSE broadcasting
    pub event_bus: EventBus,
    /// Per-IP request window for /api/*
    pub api_limiter: Arc<ApiRateLimiter>,
    /// Deployment environment label reported by /api/health
    pub environment: String,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last 5xx failure for diagnostics
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        provider: Arc<dyn InsightProvider>,
        event_bus: EventBus,
        environment: String,
    ) -> Self {
        Self {
            db,
            provider,
            event_bus,
            api_limiter: rate_limit::api_rate_limiter(),
            environment,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }
}

/// Record 5xx responses for /api/health diagnostics
async fn track_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        let mut last_error = state.last_error.write().await;
        *last_error = Some(format!("{} {} -> {}", method, path, response.status()));
    }

    response
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(api::analysis_routes())
        .merge(api::meeting_routes())
        .merge(api::business_routes())
        .merge(api::health_routes())
        .route("/events", get(api::event_stream))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce_api_rate_limit,
        ));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_server_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
