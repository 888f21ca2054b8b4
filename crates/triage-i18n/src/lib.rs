//! Triage Localization
//!
//! Resolves display text for triage results by rule identifier and language.
//! English text always comes from the rule table itself. Translations cover
//! the built-in rules and the fallback result; rules from any other table keep
//! their own text in every language.

mod catalog;
mod language;

pub use catalog::{rule_text, severity_label, RuleText};
pub use language::{Language, LanguageError};

use serde::{Deserialize, Serialize};
use triage_engine::{RuleTable, Severity, TriageResult};

/// A triage result rendered for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedResult {
    pub severity: Severity,
    pub severity_label: String,
    pub rule_id: Option<String>,
    pub message: String,
    pub recommended_action: String,
    pub language: Language,
}

/// Renders results produced by one rule table
///
/// Rule ids are only meaningful within their table, so catalog translations
/// are applied to rule results only when the table is the built-in one.
#[derive(Debug, Clone, Copy)]
pub struct Localizer {
    builtin_rules: bool,
}

impl Localizer {
    pub fn for_table(table: &RuleTable) -> Self {
        Self {
            builtin_rules: table.is_builtin(),
        }
    }

    /// Localize a result, keeping its own text when no translation applies
    pub fn localize(&self, result: &TriageResult, language: Language) -> LocalizedResult {
        let translated = match result.rule_id.as_deref() {
            Some(_) if !self.builtin_rules => None,
            rule_id => rule_text(rule_id, language),
        };
        let (message, recommended_action) = match translated {
            Some(text) => (text.message.to_string(), text.action.to_string()),
            None => (result.message.clone(), result.recommended_action.clone()),
        };

        LocalizedResult {
            severity: result.severity,
            severity_label: severity_label(result.severity, language).to_string(),
            rule_id: result.rule_id.clone(),
            message,
            recommended_action,
            language,
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::for_table(&RuleTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use triage_engine::{Evaluator, Rule, SymptomInput};

    fn custom_evaluator() -> Evaluator {
        let table = RuleTable::new(vec![Rule::new(
            "chest-pain",
            ["chest pain"],
            Severity::Emergency,
            "Custom: possible heart attack.",
            "Custom: call 108 now.",
        )])
        .unwrap();
        Evaluator::new(Arc::new(table))
    }

    #[test]
    fn test_localize_hindi() {
        let result = Evaluator::builtin().evaluate(&SymptomInput::new(["fatigue"]));
        let localized = Localizer::default().localize(&result, Language::Hi);
        assert_eq!(localized.severity, Severity::Medium);
        assert_eq!(localized.severity_label, "मध्यम");
        assert_eq!(
            localized.message,
            "लगातार थकान के लिए चिकित्सा ध्यान की आवश्यकता हो सकती है।"
        );
        assert_eq!(localized.rule_id.as_deref(), Some("fatigue"));
    }

    #[test]
    fn test_english_matches_rule_table() {
        let evaluator = Evaluator::builtin();
        let localizer = Localizer::for_table(evaluator.table());
        for rule in evaluator.table().iter() {
            let input = SymptomInput::new(rule.symptoms().iter().cloned());
            let result = evaluator.evaluate(&input);
            let localized = localizer.localize(&result, Language::En);
            assert_eq!(localized.message, result.message);
            assert_eq!(localized.recommended_action, result.recommended_action);
        }

        let fallback = TriageResult::fallback();
        assert_eq!(localizer.localize(&fallback, Language::En).message, fallback.message);
    }

    #[test]
    fn test_custom_table_reusing_builtin_id_keeps_own_text() {
        let evaluator = custom_evaluator();
        let localizer = Localizer::for_table(evaluator.table());
        let result = evaluator.evaluate(&SymptomInput::new(["chest pain"]));
        assert_eq!(result.rule_id.as_deref(), Some("chest-pain"));

        let english = localizer.localize(&result, Language::En);
        assert_eq!(english.message, result.message);
        assert_eq!(english.recommended_action, "Custom: call 108 now.");
        assert_eq!(english.severity_label, "Emergency");

        let hindi = localizer.localize(&result, Language::Hi);
        assert_eq!(hindi.message, "Custom: possible heart attack.");
        assert_eq!(hindi.severity_label, "आपातकालीन");
    }

    #[test]
    fn test_custom_table_fallback_is_translated() {
        let evaluator = custom_evaluator();
        let localizer = Localizer::for_table(evaluator.table());
        let result = evaluator.evaluate(&SymptomInput::new(["cough"]));
        assert!(result.rule_id.is_none());

        let hindi = localizer.localize(&result, Language::Hi);
        assert_eq!(hindi.message, "कोई गंभीर लक्षण नहीं पाए गए।");
        assert_eq!(localizer.localize(&result, Language::En).message, result.message);
    }

    #[test]
    fn test_every_builtin_rule_has_hindi() {
        for rule in Evaluator::builtin().table().iter() {
            assert!(rule_text(Some(rule.id()), Language::Hi).is_some(), "{}", rule.id());
        }
        assert!(rule_text(None, Language::Hi).is_some());
    }

    #[test]
    fn test_unknown_rule_keeps_own_text() {
        let result = TriageResult {
            severity: Severity::Emergency,
            rule_id: Some("custom-stroke".into()),
            message: "Possible stroke.".into(),
            recommended_action: "Call emergency services.".into(),
        };
        let localized = Localizer::default().localize(&result, Language::Hi);
        assert_eq!(localized.message, "Possible stroke.");
        assert_eq!(localized.severity_label, "आपातकालीन");
    }
}
