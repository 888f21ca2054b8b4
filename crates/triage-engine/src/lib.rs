//! Symptom Triage Engine
//!
//! Maps a set of reported symptoms to a severity tier and a recommended action
//! using a declarative rule table.

mod error;
mod evaluator;
mod normalize;
mod rules;
mod severity;

pub use error::RuleTableError;
pub use evaluator::{Evaluator, SymptomInput, TriageResult, DEFAULT_ACTION, DEFAULT_MESSAGE};
pub use normalize::{is_normalized, normalize_name};
pub use rules::{Rule, RuleTable};
pub use severity::Severity;
