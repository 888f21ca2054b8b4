//! Rule table: which symptom combinations map to which severity

use crate::error::RuleTableError;
use crate::evaluator::SymptomInput;
use crate::normalize::is_normalized;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::info;

/// A declarative triage rule. Matches when every listed symptom is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    id: String,
    symptoms: BTreeSet<String>,
    severity: Severity,
    message: String,
    recommended_action: String,
}

impl Rule {
    /// Create a rule. Validation happens when the rule joins a [`RuleTable`].
    pub fn new<I, S>(
        id: impl Into<String>,
        symptoms: I,
        severity: Severity,
        message: impl Into<String>,
        recommended_action: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            severity,
            message: message.into(),
            recommended_action: recommended_action.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn symptoms(&self) -> &BTreeSet<String> {
        &self.symptoms
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recommended_action(&self) -> &str {
        &self.recommended_action
    }

    /// Conjunctive match: the rule's symptoms are a subset of the input
    pub fn matches(&self, input: &SymptomInput) -> bool {
        self.symptoms.is_subset(input.symptoms())
    }

    fn validate(&self) -> Result<(), RuleTableError> {
        if self.id.trim().is_empty() {
            return Err(RuleTableError::EmptyRuleId);
        }
        if self.symptoms.is_empty() {
            return Err(RuleTableError::EmptySymptoms {
                rule_id: self.id.clone(),
            });
        }
        if let Some(bad) = self.symptoms.iter().find(|s| !is_normalized(s)) {
            return Err(RuleTableError::InvalidSymptom {
                rule_id: self.id.clone(),
                symptom: bad.clone(),
            });
        }
        Ok(())
    }
}

/// On-disk shape of a rule file
#[derive(Debug, Deserialize)]
struct RuleTableFile {
    rules: Vec<Rule>,
}

/// Ordered, immutable collection of rules
///
/// Table order is only significant for equal-severity ties, where the rule
/// listed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
    /// Set only by [`RuleTable::builtin`]; localized catalogs cover these rules
    #[serde(skip)]
    builtin: bool,
}

impl RuleTable {
    /// Build a validated table
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleTableError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.id.as_str()) {
                return Err(RuleTableError::DuplicateRuleId(rule.id.clone()));
            }
        }
        Ok(Self {
            rules,
            builtin: false,
        })
    }

    /// Load a table from a TOML, JSON or YAML file with a top-level `rules` list
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let path = path.as_ref();
        let file: RuleTableFile = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;

        let table = Self::new(file.rules)?;
        info!("Loaded {} triage rules from {}", table.len(), path.display());
        Ok(table)
    }

    /// Built-in rule table
    pub fn builtin() -> Self {
        Self {
            builtin: true,
            rules: vec![
                // High
                Rule::new(
                    "chest-pain-breathlessness",
                    ["chest pain", "shortness of breath"],
                    Severity::High,
                    "Critical symptoms detected indicating possible emergency.",
                    "Call emergency services immediately.",
                ),
                Rule::new(
                    "chest-pain",
                    ["chest pain"],
                    Severity::High,
                    "Chest pain can indicate a serious medical condition.",
                    "Seek immediate medical attention.",
                ),
                Rule::new(
                    "shortness-of-breath",
                    ["shortness of breath"],
                    Severity::High,
                    "Breathing difficulty may be dangerous.",
                    "Seek immediate medical attention.",
                ),
                // Medium
                Rule::new(
                    "fatigue",
                    ["fatigue"],
                    Severity::Medium,
                    "Ongoing fatigue may require medical attention.",
                    "Consult a healthcare professional if symptoms persist.",
                ),
                Rule::new(
                    "persistent-fever-fatigue",
                    ["persistent fever", "fatigue"],
                    Severity::Medium,
                    "Symptoms may require medical consultation.",
                    "Consult a healthcare professional.",
                ),
                // Low
                Rule::new(
                    "flu-like",
                    ["fever", "cough", "sore throat"],
                    Severity::Low,
                    "Mild flu-like symptoms detected.",
                    "Rest, stay hydrated, and monitor symptoms.",
                ),
            ],
        }
    }

    /// Whether this is the built-in table rather than one loaded or assembled by a caller
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
