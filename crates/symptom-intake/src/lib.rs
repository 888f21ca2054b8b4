//! Symptom Intake
//!
//! Turns free-text symptom names and symptom-log entries into a normalized
//! [`SymptomInput`](triage_engine::SymptomInput) for the triage evaluator.

mod entry;
mod error;
mod validator;

pub use entry::SymptomEntry;
pub use error::IntakeError;
pub use triage_engine::normalize_name;
pub use validator::{Intake, IntakeConfig};
