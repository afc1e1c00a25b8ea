//! Configuration loading and resolution
//!
//! Settings resolve with ENV → TOML priority: an environment variable always
//! wins over the TOML config file, and a warning is logged when a setting is
//! present in both sources.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// TOML configuration file contents (`cadence-ai.toml`)
///
/// All fields are optional; missing values fall back to compiled defaults in
/// the consuming service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Generative-language provider API key
    pub provider_api_key: Option<String>,
    /// Provider model name (e.g. "gemini-1.5-flash")
    pub provider_model: Option<String>,
    /// SQLite database file path
    pub database_path: Option<String>,
    /// HTTP listen port
    pub port: Option<u16>,
    /// Deployment environment label reported by /api/health
    pub environment: Option<String>,
}

impl TomlConfig {
    /// Load the TOML config for a service, returning defaults if no file exists.
    ///
    /// Looks for `<config_dir>/cadence/<service>.toml` via the platform config
    /// directory (`~/.config` on Linux). A missing file is not an error; a
    /// present but unparseable file is.
    pub fn load(service: &str) -> Result<Self> {
        let Some(path) = Self::config_path(service) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Platform config file path for a service, if determinable.
    pub fn config_path(service: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cadence").join(format!("{}.toml", service)))
    }
}

/// Resolve a string setting with ENV → TOML priority.
///
/// Returns `None` when neither source provides a non-blank value. Logs a
/// warning when both sources are set (potential misconfiguration).
pub fn resolve_setting(
    name: &str,
    env_var: &str,
    toml_value: Option<&String>,
) -> Option<String> {
    let env_value = std::env::var(env_var).ok().filter(|v| is_valid_value(v));
    let toml_value = toml_value.filter(|v| is_valid_value(v));

    if env_value.is_some() && toml_value.is_some() {
        warn!(
            "{} found in both {} and TOML config. Using environment (highest priority).",
            name, env_var
        );
    }

    env_value.or_else(|| toml_value.cloned())
}

/// Validate a configured value (non-empty, non-whitespace)
pub fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty()
}

/// OS-dependent default data directory for Cadence (database location)
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("cadence"))
        .unwrap_or_else(|| PathBuf::from("./cadence_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_invalid() {
        assert!(!is_valid_value(""));
        assert!(!is_valid_value("   "));
        assert!(is_valid_value("key-123"));
    }

    #[test]
    fn env_wins_over_toml() {
        std::env::set_var("CADENCE_TEST_SETTING", "from-env");
        let toml_value = "from-toml".to_string();
        let resolved = resolve_setting("test setting", "CADENCE_TEST_SETTING", Some(&toml_value));
        assert_eq!(resolved.as_deref(), Some("from-env"));
        std::env::remove_var("CADENCE_TEST_SETTING");
    }

    #[test]
    fn falls_back_to_toml_when_env_unset() {
        std::env::remove_var("CADENCE_TEST_UNSET");
        let toml_value = "from-toml".to_string();
        let resolved = resolve_setting("test setting", "CADENCE_TEST_UNSET", Some(&toml_value));
        assert_eq!(resolved.as_deref(), Some("from-toml"));
    }
}
