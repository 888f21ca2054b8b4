//! Rule Routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use triage_engine::{Rule, Severity};

use crate::AppState;

/// Query parameters for the rules endpoint
#[derive(Debug, Deserialize)]
pub struct RuleQuery {
    /// Only rules at this severity
    pub severity: Option<Severity>,
}

/// Response for the rules endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleResponse {
    pub data: Vec<Rule>,
    pub count: usize,
}

/// List the loaded rule table
pub async fn get_rules(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RuleQuery>,
) -> Json<RuleResponse> {
    let data: Vec<Rule> = state
        .evaluator
        .table()
        .iter()
        .filter(|r| params.severity.map_or(true, |s| r.severity() == s))
        .cloned()
        .collect();

    Json(RuleResponse {
        count: data.len(),
        data,
    })
}
