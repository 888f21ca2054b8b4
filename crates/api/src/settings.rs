//! Server settings
//!
//! Layered with the `config` crate: defaults, then an optional file
//! (`triage.toml`, or the path in `TRIAGE_CONFIG`), then `TRIAGE__*`
//! environment variables (e.g. `TRIAGE__SERVER__BIND_ADDR`).

use crate::error::ApiError;
use crate::rate_limit::RateLimitConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use symptom_intake::IntakeConfig;
use triage_i18n::Language;

const DEFAULT_CONFIG_FILE: &str = "triage.toml";
const ENV_PREFIX: &str = "TRIAGE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub triage: TriageSettings,
    pub intake: IntakeConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageSettings {
    /// Custom rule table; the built-in table is used when unset
    pub rules_path: Option<PathBuf>,
    /// Language used when a request does not name one
    pub default_language: Language,
}

impl Settings {
    /// Load from `TRIAGE_CONFIG` (or `triage.toml`) and the environment
    pub fn load() -> Result<Self, ApiError> {
        let path = std::env::var("TRIAGE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from a specific file (optional) and the environment
    pub fn load_from(path: &Path) -> Result<Self, ApiError> {
        Self::load_layered(path, None)
    }

    /// `env` replaces the process environment when set
    fn load_layered(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ApiError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .source(env),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
