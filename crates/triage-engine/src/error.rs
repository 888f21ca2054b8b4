//! Rule Table Error Types

use thiserror::Error;

/// Errors while building or loading a rule table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    /// Rule declares no symptoms, so it could never match
    #[error("Rule '{rule_id}' has no symptoms")]
    EmptySymptoms { rule_id: String },

    /// Symptom is empty, padded, or not lower-case
    #[error("Rule '{rule_id}' has non-normalized symptom '{symptom}'")]
    InvalidSymptom { rule_id: String, symptom: String },

    /// Rule identifier is blank
    #[error("Rule identifier must not be empty")]
    EmptyRuleId,

    /// Two rules share an identifier
    #[error("Duplicate rule identifier: {0}")]
    DuplicateRuleId(String),

    /// Rule file could not be read or parsed
    #[error("Failed to load rule table: {0}")]
    Load(String),
}

impl From<config::ConfigError> for RuleTableError {
    fn from(err: config::ConfigError) -> Self {
        RuleTableError::Load(err.to_string())
    }
}
