//! cadence-ai - AI Insight Microservice
//!
//! Validates analysis requests, forwards text to the generative-language
//! provider, and persists structured results alongside the raw provider
//! output. Serves the /api/analysis, /api/meeting, and /api/business route
//! groups plus /api/health and the /api/events SSE stream.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cadence_ai::config::ServiceConfig;
use cadence_ai::provider::GeminiProvider;
use cadence_ai::AppState;
use cadence_common::events::EventBus;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cadence-ai (AI Insight) microservice");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration (ENV -> TOML -> defaults)
    let config = ServiceConfig::resolve()?;
    info!("Environment: {}", config.environment);
    info!("Database: {}", config.database_path.display());

    // Initialize database connection pool
    let db_pool = cadence_ai::db::init_database_pool(&config.database_path).await?;
    info!("Database connection established");

    // Event bus for SSE broadcasting
    let event_bus = EventBus::new(100);

    // Provider adapter (constructor-injected, never a global)
    let provider = GeminiProvider::new(
        config.provider_api_key.clone(),
        config.provider_model.clone(),
    );
    info!(
        "Provider adapter ready (model: {}, configured: {})",
        config.provider_model,
        provider.is_configured()
    );

    // Create application state
    let state = AppState::new(
        db_pool,
        Arc::new(provider),
        event_bus,
        config.environment.clone(),
    );

    // Build router
    let app = cadence_ai::build_router(state);

    // Start server
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
