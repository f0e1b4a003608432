//! DelayEntry (espera acotada y cancelable)
//!
//! - Resuelve la duración máxima configurada con el `VariableResolver` del
//!   host y la normaliza (no entero -> `0`; negativo -> `0` con advertencia).
//! - Bloquea el hilo llamador hasta que vence la cota o el run se detiene.
//! - Éxito sólo si la cota venció; parada y fallas internas devuelven
//!   `succeeded = false`. Nunca propaga errores ni pánicos al host.
//! - Al cargar atributos, `scaletime` sólo acepta 0/1/2. Cualquier otro código
//!   se rechaza con `InvalidAttribute`; no se interpreta como horas.

pub mod config;
pub mod unit;
pub mod wait;

use std::panic::{catch_unwind, AssertUnwindSafe};

use job_core::{AttributeStore, CheckRemark, DiagnosticLevel, EntryContext, EntryKind, EntryOutcome, JobEntry,
               JobError};

pub use config::{normalize_bound, NormalizedBound, WaitConfig, DEFAULT_MAXIMUM_TIMEOUT};
pub use unit::TimeUnit;
pub use wait::{WaitLoop, WaitState};

/// Resultado de una invocación del `DelayEntry`.
pub type WaitOutcome = EntryOutcome;

/// Nombre del atributo persistido con la duración máxima.
pub const ATTR_MAXIMUM_TIMEOUT: &str = "maximumTimeout";
/// Nombre del atributo persistido con el código de unidad (0 s, 1 min, 2 h).
pub const ATTR_SCALE_TIME: &str = "scaletime";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayEntry {
    id: String,
    pub config: WaitConfig,
}

impl DelayEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(),
               config: WaitConfig::default() }
    }

    pub fn with_config(mut self, config: WaitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_duration(mut self, raw: impl Into<String>) -> Self {
        self.config.max_duration = raw.into();
        self
    }

    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Duración máxima tras la sustitución de variables.
    pub fn resolved_max_duration(&self, ctx: &EntryContext) -> String { ctx.resolver.resolve(&self.config.max_duration) }

    fn wait(&self, ctx: &EntryContext, outcome: &mut EntryOutcome) -> Result<WaitState, JobError> {
        let (_, label) = self.config.unit.scale();
        let resolved = self.resolved_max_duration(ctx);
        let bound = normalize_bound(&resolved);

        if bound.parse_failed {
            log::debug!("[{}] maximum timeout {resolved:?} is not an integer, using default {DEFAULT_MAXIMUM_TIMEOUT}",
                        self.name());
        }
        if ctx.detailed() {
            log::debug!("[{}] let's wait for {} {label}", self.name(), bound.parsed);
        }
        if bound.reset {
            ctx.report(self.name(),
                       outcome,
                       DiagnosticLevel::Warning,
                       format!("maximum time reset to default: {} {label}", bound.units));
        }

        WaitLoop::new(ctx.clock, ctx.signal, self.config.unit, bound.units, ctx.config.poll_interval).run()
    }
}

impl JobEntry for DelayEntry {
    fn id(&self) -> &str { &self.id }

    fn kind(&self) -> EntryKind { EntryKind::Delay }

    fn execute(&self, ctx: &EntryContext) -> EntryOutcome {
        let mut outcome = EntryOutcome::failed();
        let result = catch_unwind(AssertUnwindSafe(|| self.wait(ctx, &mut outcome)));
        match result {
            Ok(Ok(WaitState::Elapsed)) => {
                ctx.report(self.name(), &mut outcome, DiagnosticLevel::Detailed, "wait time has elapsed");
                outcome.succeeded = true;
            }
            Ok(Ok(_)) => {
                log::debug!("[{}] run stopped before the wait time elapsed", self.name());
                outcome.succeeded = false;
            }
            Ok(Err(e)) => {
                outcome.succeeded = false;
                ctx.report(self.name(), &mut outcome, DiagnosticLevel::Error, format!("error while waiting: {e}"));
            }
            Err(panic) => {
                let msg = panic.downcast_ref::<&str>()
                               .map(|s| s.to_string())
                               .or_else(|| panic.downcast_ref::<String>().cloned())
                               .unwrap_or_else(|| "unknown panic".to_string());
                outcome.succeeded = false;
                ctx.report(self.name(), &mut outcome, DiagnosticLevel::Error, format!("error while waiting: {msg}"));
            }
        }
        outcome
    }

    fn check(&self, remarks: &mut Vec<CheckRemark>) {
        remarks.push(CheckRemark::ok(self.name(), format!("maximum timeout: {}", self.config.max_duration)));
        remarks.push(CheckRemark::ok(self.name(), format!("scale time: {}", self.config.unit)));
    }

    fn save_attributes(&self, store: &mut dyn AttributeStore) -> Result<(), JobError> {
        store.set_string(ATTR_MAXIMUM_TIMEOUT, &self.config.max_duration)?;
        store.set_integer(ATTR_SCALE_TIME, self.config.unit.code())
    }

    fn load_attributes(&mut self, store: &dyn AttributeStore) -> Result<(), JobError> {
        let max_duration = store.get_string(ATTR_MAXIMUM_TIMEOUT)?
                                .unwrap_or_else(|| DEFAULT_MAXIMUM_TIMEOUT.to_string());
        let code = store.get_integer(ATTR_SCALE_TIME)?
                        .ok_or_else(|| JobError::MissingAttribute(ATTR_SCALE_TIME.to_string()))?;
        let unit = TimeUnit::from_code(code).ok_or_else(|| JobError::InvalidAttribute { name:
                                                                                           ATTR_SCALE_TIME.to_string(),
                                                                                       value: code.to_string() })?;
        self.config = WaitConfig { max_duration, unit };
        Ok(())
    }

    fn reset_errors_before_execution(&self) -> bool {
        // el resultado del entry previo debe seguir evaluable
        false
    }
}
