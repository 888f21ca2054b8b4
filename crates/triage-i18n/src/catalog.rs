//! Message catalog keyed by rule identifier

use crate::language::Language;
use triage_engine::Severity;

/// Message and action for one rule in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleText {
    pub message: &'static str,
    pub action: &'static str,
}

const fn text(message: &'static str, action: &'static str) -> RuleText {
    RuleText { message, action }
}

/// Translated text for a built-in rule. `None` as the rule id selects the
/// fallback result.
///
/// English has no entries: the rule table's own text is the English text.
pub fn rule_text(rule_id: Option<&str>, language: Language) -> Option<RuleText> {
    use Language::Hi;

    let found = match (rule_id, language) {
        (None, Hi) => text(
            "कोई गंभीर लक्षण नहीं पाए गए।",
            "अपने लक्षणों पर नज़र रखें और पर्याप्त आराम करें।",
        ),

        (Some("chest-pain-breathlessness"), Hi) => text(
            "गंभीर लक्षण पाए गए हैं, यह आपात स्थिति हो सकती है।",
            "तुरंत आपातकालीन सेवाओं से संपर्क करें या नज़दीकी अस्पताल जाएँ।",
        ),

        (Some("chest-pain"), Hi) => text(
            "सीने में दर्द किसी गंभीर बीमारी का संकेत हो सकता है।",
            "तुरंत चिकित्सा सहायता लें।",
        ),

        (Some("shortness-of-breath"), Hi) => text(
            "सांस लेने में कठिनाई खतरनाक हो सकती है।",
            "तुरंत चिकित्सा सहायता लें।",
        ),

        (Some("fatigue"), Hi) => text(
            "लगातार थकान के लिए चिकित्सा ध्यान की आवश्यकता हो सकती है।",
            "यदि लक्षण बने रहें तो डॉक्टर से परामर्श करें।",
        ),

        (Some("persistent-fever-fatigue"), Hi) => text(
            "इन लक्षणों के लिए डॉक्टर से परामर्श की आवश्यकता हो सकती है।",
            "डॉक्टर से परामर्श करें।",
        ),

        (Some("flu-like"), Hi) => text(
            "हल्के फ्लू जैसे लक्षण पाए गए।",
            "आराम करें, पर्याप्त पानी पिएं और लक्षणों पर नज़र रखें।",
        ),

        _ => return None,
    };

    Some(found)
}

/// Display label for a severity tier
pub fn severity_label(severity: Severity, language: Language) -> &'static str {
    match (severity, language) {
        (Severity::Low, Language::En) => "Low",
        (Severity::Medium, Language::En) => "Medium",
        (Severity::High, Language::En) => "High",
        (Severity::Emergency, Language::En) => "Emergency",
        (Severity::Low, Language::Hi) => "कम",
        (Severity::Medium, Language::Hi) => "मध्यम",
        (Severity::High, Language::Hi) => "उच्च",
        (Severity::Emergency, Language::Hi) => "आपातकालीन",
    }
}
