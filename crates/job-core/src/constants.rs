//! Constantes del runner.
//!
//! Agrupa los límites del intervalo de sondeo usado por los entries que
//! esperan (p. ej. `DelayEntry`). El intervalo acota cuánto tarda un entry en
//! observar una parada externa.

/// Intervalo de sondeo por defecto (ms).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Cota inferior aceptada para el intervalo de sondeo (ms).
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Cota superior aceptada para el intervalo de sondeo (ms). Una parada se
/// observa como máximo un intervalo después de producirse.
pub const MAX_POLL_INTERVAL_MS: u64 = 1_000;

/// Variable de entorno con el intervalo de sondeo.
pub const ENV_POLL_INTERVAL_MS: &str = "JOBFLOW_POLL_INTERVAL_MS";

/// Variable de entorno que activa los diagnósticos detallados.
pub const ENV_LOG_DETAILED: &str = "JOBFLOW_LOG_DETAILED";
