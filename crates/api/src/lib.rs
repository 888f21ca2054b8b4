//! Symptom Triage API Server
//!
//! REST API exposing the triage evaluator to the health application frontend.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use symptom_intake::Intake;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use triage_engine::{Evaluator, RuleTable};
use triage_i18n::{Language, Localizer};

mod error;
mod rate_limit;
pub mod routes;
mod settings;

pub use error::ApiError;
pub use rate_limit::{create_governor_config, with_rate_limit, RateLimitConfig};
pub use settings::{LogFormat, LoggingSettings, ServerSettings, Settings, TriageSettings};

/// Application state shared across handlers
pub struct AppState {
    pub evaluator: Evaluator,
    /// Translates results of `evaluator`'s table
    pub localizer: Localizer,
    pub intake: Intake,
    pub default_language: Language,
    pub version: String,
    pub start_time: std::time::Instant,
    /// Prometheus handle, present once the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(evaluator: Evaluator, intake: Intake, default_language: Language) -> Self {
        Self {
            localizer: Localizer::for_table(evaluator.table()),
            evaluator,
            intake,
            default_language,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics: None,
        }
    }

    /// Build state from settings, loading a custom rule table if configured
    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        let table = match &settings.triage.rules_path {
            Some(path) => RuleTable::from_path(path)?,
            None => {
                info!("Using built-in triage rules");
                RuleTable::builtin()
            }
        };

        Ok(Self::new(
            Evaluator::new(Arc::new(table)),
            Intake::new(settings.intake.clone()),
            settings.triage.default_language,
        ))
    }
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub rule_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/triage", post(routes::triage::post_triage))
        .route("/api/v1/rules", get(routes::rules::get_rules))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        rule_count: state.evaluator.table().len(),
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Initialize logging
pub fn init_logging(settings: &LoggingSettings) -> Result<(), ApiError> {
    let level: Level = settings
        .level
        .parse()
        .map_err(|_| ApiError::Config(format!("invalid log level: {}", settings.level)))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = match settings.format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
    };
    result.map_err(|e| ApiError::Config(e.to_string()))
}

/// Install the global Prometheus recorder
pub fn install_metrics() -> Result<PrometheusHandle, ApiError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ApiError::Config(format!("metrics recorder: {e}")))
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), ApiError> {
    let mut state = AppState::from_settings(&settings)?;
    state.metrics = Some(install_metrics()?);

    let app = with_rate_limit(create_router(Arc::new(state)), &settings.rate_limit)?
        .layer(TraceLayer::new_for_http());

    info!("Starting triage server on {}", settings.server.bind_addr);

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
