//! Triage evaluator

use crate::rules::{Rule, RuleTable};
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Message returned when no rule matches
pub const DEFAULT_MESSAGE: &str = "No serious symptoms detected.";
/// Action returned when no rule matches
pub const DEFAULT_ACTION: &str = "Monitor your symptoms and rest.";

/// Reported symptoms for one evaluation
///
/// Symptom names are expected to be normalized (trimmed, lower-case) by the
/// caller. Age and duration are carried for callers but not used in matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomInput {
    symptoms: BTreeSet<String>,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    duration_in_days: Option<u32>,
}

impl SymptomInput {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            age: None,
            duration_in_days: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_in_days = Some(days);
        self
    }

    pub fn symptoms(&self) -> &BTreeSet<String> {
        &self.symptoms
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn duration_in_days(&self) -> Option<u32> {
        self.duration_in_days
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// Outcome of an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Detected severity
    pub severity: Severity,
    /// Identifier of the winning rule, `None` for the fallback result
    pub rule_id: Option<String>,
    /// What was detected
    pub message: String,
    /// Suggested next step
    pub recommended_action: String,
}

impl TriageResult {
    /// Result used when no rule matches
    pub fn fallback() -> Self {
        Self {
            severity: Severity::Low,
            rule_id: None,
            message: DEFAULT_MESSAGE.to_string(),
            recommended_action: DEFAULT_ACTION.to_string(),
        }
    }

    fn from_rule(rule: &Rule) -> Self {
        Self {
            severity: rule.severity(),
            rule_id: Some(rule.id().to_string()),
            message: rule.message().to_string(),
            recommended_action: rule.recommended_action().to_string(),
        }
    }
}

/// Stateless evaluator over a shared rule table
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: Arc<RuleTable>,
}

impl Evaluator {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    /// Evaluator over the built-in rule table
    pub fn builtin() -> Self {
        Self::new(Arc::new(RuleTable::builtin()))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Pick the most severe matching rule, or the fallback result.
    ///
    /// On equal severity the first matching rule in table order wins.
    pub fn evaluate(&self, input: &SymptomInput) -> TriageResult {
        let mut best: Option<&Rule> = None;

        for rule in self.table.iter().filter(|r| r.matches(input)) {
            match best {
                Some(current) if rule.severity() <= current.severity() => {}
                _ => best = Some(rule),
            }
        }

        match best {
            Some(rule) => {
                debug!(
                    rule_id = rule.id(),
                    severity = %rule.severity(),
                    reported = input.symptoms.len(),
                    "Triage rule matched"
                );
                TriageResult::from_rule(rule)
            }
            None => {
                debug!(reported = input.symptoms.len(), "No triage rule matched");
                TriageResult::fallback()
            }
        }
    }

    /// Every rule matching the input, in table order
    pub fn matching_rules<'a>(
        &'a self,
        input: &'a SymptomInput,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.table.iter().filter(move |r| r.matches(input))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn evaluate(symptoms: &[&str]) -> TriageResult {
        Evaluator::builtin().evaluate(&SymptomInput::new(symptoms.iter().copied()))
    }

    #[test]
    fn test_empty_input_falls_back() {
        let result = evaluate(&[]);
        assert_eq!(result, TriageResult::fallback());
        assert_eq!(result.severity, Severity::Low);
        assert!(result.rule_id.is_none());
    }

    #[test]
    fn test_combined_rule_wins_tie() {
        let result = evaluate(&["chest pain", "shortness of breath"]);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.rule_id.as_deref(), Some("chest-pain-breathlessness"));
        assert_eq!(
            result.message,
            "Critical symptoms detected indicating possible emergency."
        );
    }

    #[test]
    fn test_single_chest_pain() {
        let result = evaluate(&["chest pain"]);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(
            result.message,
            "Chest pain can indicate a serious medical condition."
        );
    }

    #[test]
    fn test_fatigue_is_medium() {
        let result = evaluate(&["fatigue"]);
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.rule_id.as_deref(), Some("fatigue"));
    }

    #[test]
    fn test_flu_like_is_low_but_not_fallback() {
        let result = evaluate(&["fever", "cough", "sore throat"]);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.message, "Mild flu-like symptoms detected.");
        assert_ne!(result.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_partial_conjunction_does_not_match() {
        let result = evaluate(&["fever", "cough"]);
        assert_eq!(result, TriageResult::fallback());
    }

    #[test]
    fn test_extra_symptoms_do_not_disqualify() {
        let result = evaluate(&["fatigue", "headache", "nausea"]);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_higher_severity_beats_larger_rule() {
        let result = evaluate(&["fever", "cough", "sore throat", "shortness of breath"]);
        assert_eq!(result.rule_id.as_deref(), Some("shortness-of-breath"));
    }

    #[test]
    fn test_no_internal_normalization() {
        let result = evaluate(&["Chest Pain"]);
        assert_eq!(result, TriageResult::fallback());
    }

    #[test]
    fn test_injected_table_and_table_order_tie_break() {
        let table = RuleTable::new(vec![
            Rule::new("first", ["dizziness"], Severity::Medium, "first", "a"),
            Rule::new("second", ["dizziness"], Severity::Medium, "second", "a"),
            Rule::new("worse", ["dizziness", "fainting"], Severity::Emergency, "worse", "a"),
        ])
        .unwrap();
        let evaluator = Evaluator::new(Arc::new(table));

        let result = evaluator.evaluate(&SymptomInput::new(["dizziness"]));
        assert_eq!(result.rule_id.as_deref(), Some("first"));

        let result = evaluator.evaluate(&SymptomInput::new(["fainting", "dizziness"]));
        assert_eq!(result.severity, Severity::Emergency);
    }

    #[test]
    fn test_matching_rules_in_table_order() {
        let evaluator = Evaluator::builtin();
        let input = SymptomInput::new(["shortness of breath", "chest pain", "fatigue"]);
        let ids: Vec<_> = evaluator.matching_rules(&input).map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "chest-pain-breathlessness",
                "chest-pain",
                "shortness-of-breath",
                "fatigue"
            ]
        );
    }

    #[test]
    fn test_age_and_duration_ignored() {
        let plain = SymptomInput::new(["fatigue"]);
        let detailed = plain.clone().with_age(72).with_duration_days(14);
        assert_eq!(detailed.age(), Some(72));
        assert_eq!(detailed.duration_in_days(), Some(14));

        let evaluator = Evaluator::builtin();
        assert_eq!(evaluator.evaluate(&plain), evaluator.evaluate(&detailed));
    }

    fn symptom() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("chest pain".to_string()),
            Just("shortness of breath".to_string()),
            Just("fatigue".to_string()),
            Just("persistent fever".to_string()),
            Just("fever".to_string()),
            Just("cough".to_string()),
            Just("sore throat".to_string()),
            "[a-z ]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_idempotent(symptoms in prop::collection::vec(symptom(), 0..8)) {
            let evaluator = Evaluator::builtin();
            let input = SymptomInput::new(symptoms);
            prop_assert_eq!(evaluator.evaluate(&input), evaluator.evaluate(&input));
        }

        #[test]
        fn prop_superset_never_lowers_severity(
            a in prop::collection::vec(symptom(), 0..6),
            b in prop::collection::vec(symptom(), 0..6),
        ) {
            let evaluator = Evaluator::builtin();
            let base = evaluator.evaluate(&SymptomInput::new(a.clone()));
            let wider = evaluator.evaluate(&SymptomInput::new(a.into_iter().chain(b)));
            prop_assert!(wider.severity >= base.severity);
        }

        #[test]
        fn prop_result_comes_from_a_matching_rule(
            symptoms in prop::collection::vec(symptom(), 0..8),
        ) {
            let evaluator = Evaluator::builtin();
            let input = SymptomInput::new(symptoms);
            let result = evaluator.evaluate(&input);
            match &result.rule_id {
                Some(id) => {
                    let rule = evaluator.table().get(id).unwrap();
                    prop_assert!(rule.matches(&input));
                    let max = evaluator.matching_rules(&input).map(|r| r.severity()).max();
                    prop_assert_eq!(Some(result.severity), max);
                }
                None => {
                    prop_assert_eq!(evaluator.matching_rules(&input).count(), 0);
                }
            }
        }
    }
}
