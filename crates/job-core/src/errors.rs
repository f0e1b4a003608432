//! Errores específicos del core.
//!
//! Las capacidades que el host inyecta en un entry (reloj, señal de parada,
//! almacén de atributos) devuelven `JobError`. Los entries nunca propagan
//! estos errores al host: los convierten en diagnósticos de nivel `Error`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum JobError {
    #[error("clock failure: {0}")] Clock(String),
    #[error("stop signal query failed: {0}")] Signal(String),
    #[error("missing attribute: {0}")] MissingAttribute(String),
    #[error("invalid attribute {name}: {value}")] InvalidAttribute { name: String, value: String },
    #[error("configuration error: {0}")] Config(String),
    #[error("internal: {0}")] Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_attribute_format() {
        let err = JobError::InvalidAttribute { name: "scaletime".into(),
                                               value: "7".into() };
        assert_eq!(err.to_string(), "invalid attribute scaletime: 7");
    }

    #[test]
    fn errors_roundtrip_through_json() {
        let err = JobError::Clock("before epoch".into());
        let v = serde_json::to_value(&err).unwrap();
        let back: JobError = serde_json::from_value(v).unwrap();
        assert_eq!(back, err);
    }
}
