//! Intake Error Types

use thiserror::Error;

/// Errors while building a symptom input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    /// Symptom name is blank after trimming
    #[error("Symptom name must not be empty")]
    EmptyName,

    /// Symptom name exceeds the configured length
    #[error("Symptom name is {len} characters, maximum is {max}")]
    NameTooLong { len: usize, max: usize },

    /// Too many distinct symptoms reported
    #[error("{count} symptoms reported, maximum is {max}")]
    TooManySymptoms { count: usize, max: usize },

    /// Numeric field out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}
