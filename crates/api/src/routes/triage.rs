//! Triage Routes

use axum::{extract::State, Json};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use symptom_intake::SymptomEntry;
use tracing::info;
use triage_i18n::{Language, LocalizedResult};

use crate::error::ApiError;
use crate::AppState;

/// Body of a triage request
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Free-text symptom names
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Entries from the user's symptom log
    #[serde(default)]
    pub entries: Vec<SymptomEntry>,
    pub age: Option<u32>,
    pub duration_in_days: Option<u32>,
    /// Response language, server default when absent
    pub language: Option<Language>,
}

/// Triage response
#[derive(Debug, Serialize, Deserialize)]
pub struct TriageResponse {
    #[serde(flatten)]
    pub result: LocalizedResult,
    /// Every rule that matched, in table order
    pub matched_rules: Vec<String>,
}

/// Evaluate reported symptoms
pub async fn post_triage(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<TriageResponse>, ApiError> {
    let names = request
        .symptoms
        .iter()
        .map(String::as_str)
        .chain(request.entries.iter().map(|e| e.name.as_str()));

    let input = state
        .intake
        .build(names, request.age, request.duration_in_days)
        .map_err(|e| {
            counter!("triage_rejected_total").increment(1);
            ApiError::from(e)
        })?;

    let result = state.evaluator.evaluate(&input);
    let matched_rules = state
        .evaluator
        .matching_rules(&input)
        .map(|r| r.id().to_string())
        .collect();

    counter!("triage_evaluations_total", "severity" => result.severity.as_str()).increment(1);
    info!(
        severity = %result.severity,
        rule_id = result.rule_id.as_deref().unwrap_or("none"),
        "Triage evaluated"
    );

    let language = request.language.unwrap_or(state.default_language);
    Ok(Json(TriageResponse {
        result: state.localizer.localize(&result, language),
        matched_rules,
    }))
}
