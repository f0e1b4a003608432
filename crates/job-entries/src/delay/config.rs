//! Configuración del `DelayEntry` y su normalización.

use serde::{Deserialize, Serialize};

use super::unit::TimeUnit;

/// Valor por defecto de la duración máxima: `0` significa esperar sin límite.
pub const DEFAULT_MAXIMUM_TIMEOUT: &str = "0";

/// Configuración provista por el host en cada invocación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Duración máxima tal como se configuró (puede contener `${VAR}`).
    pub max_duration: String,
    pub unit: TimeUnit,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self { max_duration: DEFAULT_MAXIMUM_TIMEOUT.to_string(),
               unit: TimeUnit::Seconds }
    }
}

impl WaitConfig {
    pub fn new(max_duration: impl Into<String>, unit: TimeUnit) -> Self {
        Self { max_duration: max_duration.into(),
               unit }
    }
}

/// Cota resultante de normalizar la duración ya sustituida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedBound {
    /// Cota en unidades enteras. `0` = sin límite.
    pub units: u64,
    /// Valor parseado antes del chequeo de cordura.
    pub parsed: i64,
    /// El texto no era un entero y se usó el default.
    pub parse_failed: bool,
    /// El valor era negativo y se reinició al default.
    pub reset: bool,
}

fn default_units() -> i64 { DEFAULT_MAXIMUM_TIMEOUT.parse().unwrap_or(0) }

/// Convierte la duración sustituida en una cota no negativa.
///
/// - Texto no entero: default, sin `reset`.
/// - Valor negativo: default, con `reset` (el caller emite la advertencia).
pub fn normalize_bound(resolved: &str) -> NormalizedBound {
    let (parsed, parse_failed) = match resolved.trim().parse::<i64>() {
        Ok(v) => (v, false),
        Err(_) => (default_units(), true),
    };
    if parsed < 0 {
        return NormalizedBound { units: default_units() as u64,
                                 parsed,
                                 parse_failed,
                                 reset: true };
    }
    NormalizedBound { units: parsed as u64,
                      parsed,
                      parse_failed,
                      reset: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        let b = normalize_bound("5");
        assert_eq!(b.units, 5);
        assert!(!b.reset && !b.parse_failed);
    }

    #[test]
    fn negatives_reset_to_default() {
        for raw in ["-1", "-3", "-86400", "-9223372036854775808"] {
            let b = normalize_bound(raw);
            assert_eq!(b.units, 0, "{raw}");
            assert!(b.reset, "{raw}");
        }
    }

    #[test]
    fn malformed_falls_back_without_reset() {
        for raw in ["abc", "", "1.5", "99999999999999999999999"] {
            let b = normalize_bound(raw);
            assert_eq!(b.units, 0, "{raw}");
            assert!(b.parse_failed, "{raw}");
            assert!(!b.reset, "{raw}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_bound(" 12 ").units, 12);
    }
}
