//! Symptom log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A symptom as recorded in a user's symptom log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: Uuid,
    /// Free-text name as the user typed it
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl SymptomEntry {
    /// Record a symptom now
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let a = SymptomEntry::new("Fatigue", "since Monday");
        let b = SymptomEntry::new("Fatigue", "");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Fatigue");
        assert!(a.recorded_at <= Utc::now());
    }

    #[test]
    fn test_deserialize_without_description() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Cough",
            "recorded_at": "2024-03-01T09:30:00Z"
        }"#;
        let entry: SymptomEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "Cough");
        assert!(entry.description.is_empty());
    }
}
