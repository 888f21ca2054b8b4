//! Symptom name normalization
//!
//! Shared by rule table validation and caller-side intake so both agree on
//! what a matchable symptom looks like.

/// Trim, collapse internal whitespace and lower-case a symptom name
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a name is already in normalized form (and non-empty)
pub fn is_normalized(name: &str) -> bool {
    !name.is_empty() && normalize_name(name) == name
}
