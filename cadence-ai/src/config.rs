//! Configuration resolution for cadence-ai
//!
//! Every setting resolves with ENV → TOML priority (see
//! `cadence_common::config::resolve_setting`), with compiled defaults as the
//! final tier. An absent provider API key is a valid configuration: the
//! service starts and answers everything from fallbacks.

use cadence_common::config::{default_data_dir, resolve_setting, TomlConfig};
use cadence_common::{Error, Result};
use std::path::PathBuf;
use tracing::warn;

use crate::provider::gemini::DEFAULT_MODEL;

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 5740;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Generative-language API key; `None` disables real provider calls
    pub provider_api_key: Option<String>,
    /// Provider model name
    pub provider_model: String,
    /// SQLite database file
    pub database_path: PathBuf,
    /// HTTP listen port
    pub port: u16,
    /// Environment label reported by /api/health
    pub environment: String,
}

impl ServiceConfig {
    /// Resolve configuration from environment and the cadence-ai TOML file
    pub fn resolve() -> Result<Self> {
        let toml = TomlConfig::load("cadence-ai")?;

        let provider_api_key = resolve_setting(
            "provider API key",
            "CADENCE_PROVIDER_API_KEY",
            toml.provider_api_key.as_ref(),
        );
        if provider_api_key.is_none() {
            warn!(
                "Provider API key not configured; all analysis requests will \
                 receive fallback responses. Set CADENCE_PROVIDER_API_KEY or \
                 provider_api_key in cadence-ai.toml to enable the provider."
            );
        }

        let provider_model = resolve_setting(
            "provider model",
            "CADENCE_PROVIDER_MODEL",
            toml.provider_model.as_ref(),
        )
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let database_path = resolve_setting(
            "database path",
            "CADENCE_DATABASE_PATH",
            toml.database_path.as_ref(),
        )
        .map(PathBuf::from)
        .unwrap_or_else(|| default_data_dir().join("cadence.db"));

        let port = match std::env::var("CADENCE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid CADENCE_PORT: {}", value)))?,
            Err(_) => toml.port.unwrap_or(DEFAULT_PORT),
        };

        let environment = resolve_setting("environment", "CADENCE_ENV", toml.environment.as_ref())
            .unwrap_or_else(|| "development".to_string());

        Ok(Self {
            provider_api_key,
            provider_model,
            database_path,
            port,
            environment,
        })
    }
}
