//! Carga de configuración del runner desde variables de entorno.
//! Usa convención `JOBFLOW_*` y un `.env` opcional.

use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::{DEFAULT_POLL_INTERVAL_MS, ENV_LOG_DETAILED, ENV_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS,
                       MIN_POLL_INTERVAL_MS};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Intervalo entre comprobaciones de parada / tiempo transcurrido.
    pub poll_interval: Duration,
    /// Si los entries deben emitir diagnósticos de nivel `Detailed`.
    pub detailed: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
               detailed: false }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let poll_ms = env::var(ENV_POLL_INTERVAL_MS).ok();
        let detailed = env::var(ENV_LOG_DETAILED).ok();
        Self::from_values(poll_ms.as_deref(), detailed.as_deref())
    }

    /// Construye la configuración a partir de los valores crudos. Valores no
    /// parseables vuelven a los defaults; el intervalo se acota a
    /// [`MIN_POLL_INTERVAL_MS`, `MAX_POLL_INTERVAL_MS`].
    pub fn from_values(poll_interval_ms: Option<&str>, detailed: Option<&str>) -> Self {
        let poll_ms = poll_interval_ms.and_then(|v| v.trim().parse::<u64>().ok())
                                      .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        let detailed = detailed.map(parse_flag).unwrap_or(false);
        Self { poll_interval: clamp_poll_interval(Duration::from_millis(poll_ms)),
               detailed }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = clamp_poll_interval(interval);
        self
    }

    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

pub fn clamp_poll_interval(interval: Duration) -> Duration {
    interval.clamp(Duration::from_millis(MIN_POLL_INTERVAL_MS),
                   Duration::from_millis(MAX_POLL_INTERVAL_MS))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = RunnerConfig::from_values(None, None);
        assert_eq!(cfg, RunnerConfig::default());
    }

    #[test]
    fn poll_interval_is_clamped() {
        assert_eq!(RunnerConfig::from_values(Some("5"), None).poll_interval, Duration::from_millis(100));
        assert_eq!(RunnerConfig::from_values(Some("60000"), None).poll_interval, Duration::from_millis(1000));
        assert_eq!(RunnerConfig::from_values(Some("400"), None).poll_interval, Duration::from_millis(400));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = RunnerConfig::from_values(Some("soon"), Some("maybe"));
        assert_eq!(cfg.poll_interval, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
        assert!(!cfg.detailed);
    }

    #[test]
    fn detailed_flag_variants() {
        for raw in ["1", "true", "YES", " on "] {
            assert!(RunnerConfig::from_values(None, Some(raw)).detailed, "{raw} should enable");
        }
        assert!(!RunnerConfig::from_values(None, Some("0")).detailed);
    }
}
