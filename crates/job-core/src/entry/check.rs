use serde::{Deserialize, Serialize};

/// Severidad de una observación de validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckSeverity { Ok, Comment, Warning, Error }

/// Observación producida por `JobEntry::check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRemark {
    pub severity: CheckSeverity,
    pub text: String,
    /// Entry que originó la observación.
    pub source: String,
}

impl CheckRemark {
    pub fn ok(source: &str, text: impl Into<String>) -> Self {
        Self { severity: CheckSeverity::Ok,
               text: text.into(),
               source: source.to_string() }
    }
}
