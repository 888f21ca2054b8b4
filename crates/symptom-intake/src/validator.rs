//! Intake validation

use crate::entry::SymptomEntry;
use crate::error::IntakeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use triage_engine::{normalize_name, SymptomInput};

/// Intake limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Maximum distinct symptoms per request
    pub max_symptoms: usize,
    /// Maximum characters in a normalized symptom name
    pub max_name_len: usize,
    /// Valid age range (years)
    pub age_range: (u32, u32),
    /// Valid symptom duration range (days)
    pub duration_range: (u32, u32),
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_symptoms: 32,
            max_name_len: 64,
            age_range: (0, 130),
            duration_range: (0, 3650),
        }
    }
}

impl IntakeConfig {
    /// Tighter limits for public endpoints
    pub fn strict() -> Self {
        Self {
            max_symptoms: 12,
            max_name_len: 40,
            ..Default::default()
        }
    }
}

/// Builds validated symptom inputs
pub struct Intake {
    config: IntakeConfig,
}

impl Intake {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Normalize and validate a single name
    pub fn validate_name(&self, raw: &str) -> Result<String, IntakeError> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(IntakeError::EmptyName);
        }
        let len = name.chars().count();
        if len > self.config.max_name_len {
            return Err(IntakeError::NameTooLong {
                len,
                max: self.config.max_name_len,
            });
        }
        Ok(name)
    }

    fn validate_range(
        &self,
        field: &'static str,
        value: Option<u32>,
        range: (u32, u32),
    ) -> Result<(), IntakeError> {
        match value {
            Some(v) if v < range.0 || v > range.1 => Err(IntakeError::OutOfRange {
                field,
                value: v,
                min: range.0,
                max: range.1,
            }),
            _ => Ok(()),
        }
    }

    /// Build an input from free-text names. Duplicates after normalization collapse.
    pub fn build<I, S>(
        &self,
        names: I,
        age: Option<u32>,
        duration_in_days: Option<u32>,
    ) -> Result<SymptomInput, IntakeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.validate_range("age", age, self.config.age_range)?;
        self.validate_range(
            "duration_in_days",
            duration_in_days,
            self.config.duration_range,
        )?;

        let mut symptoms = BTreeSet::new();
        for raw in names {
            let name = self.validate_name(raw.as_ref()).map_err(|e| {
                warn!("Rejected symptom input: {}", e);
                e
            })?;
            symptoms.insert(name);

            // Stop at the first distinct name past the limit
            if symptoms.len() > self.config.max_symptoms {
                warn!("Rejected symptom input: more than {} symptoms", self.config.max_symptoms);
                return Err(IntakeError::TooManySymptoms {
                    count: symptoms.len(),
                    max: self.config.max_symptoms,
                });
            }
        }

        debug!("Built symptom input with {} symptoms", symptoms.len());

        let mut input = SymptomInput::new(symptoms);
        if let Some(age) = age {
            input = input.with_age(age);
        }
        if let Some(days) = duration_in_days {
            input = input.with_duration_days(days);
        }
        Ok(input)
    }

    /// Build an input from symptom log entries
    pub fn from_entries(
        &self,
        entries: &[SymptomEntry],
        age: Option<u32>,
        duration_in_days: Option<u32>,
    ) -> Result<SymptomInput, IntakeError> {
        self.build(entries.iter().map(|e| e.name.as_str()), age, duration_in_days)
    }
}

impl Default for Intake {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}
