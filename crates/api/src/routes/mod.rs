//! HTTP route handlers

pub mod rules;
pub mod triage;
