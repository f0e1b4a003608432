use crate::clock::Clock;
use crate::config::RunnerConfig;
use crate::entry::{Diagnostic, DiagnosticLevel, DiagnosticSink, EntryOutcome};
use crate::resolve::VariableResolver;
use crate::signal::CancellationSignal;

/// Contexto de ejecución entregado a `JobEntry::execute`.
///
/// Todas las capacidades son de sólo lectura para el entry: el host conserva
/// la propiedad de la señal de parada, el reloj y el resolvedor de variables.
pub struct EntryContext<'a> {
    pub signal: &'a dyn CancellationSignal,
    pub clock: &'a dyn Clock,
    pub resolver: &'a dyn VariableResolver,
    pub sink: Option<&'a dyn DiagnosticSink>,
    pub config: RunnerConfig,
}

impl<'a> EntryContext<'a> {
    pub fn new(signal: &'a dyn CancellationSignal, clock: &'a dyn Clock, resolver: &'a dyn VariableResolver) -> Self {
        Self { signal,
               clock,
               resolver,
               sink: None,
               config: RunnerConfig::default() }
    }

    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn detailed(&self) -> bool { self.config.detailed }

    /// Registra un diagnóstico en `outcome`, lo reenvía al sink (si hay) y lo
    /// refleja en `log`. Los `Detailed` se descartan si no están activos.
    pub fn report(&self, entry_name: &str, outcome: &mut EntryOutcome, level: DiagnosticLevel, message: impl Into<String>) {
        if level == DiagnosticLevel::Detailed && !self.detailed() {
            return;
        }
        let diagnostic = Diagnostic::new(level, message);
        log::log!(level.log_level(), "[{entry_name}] {}", diagnostic.message);
        if let Some(sink) = self.sink {
            sink.emit(&diagnostic);
        }
        outcome.diagnostics.push(diagnostic);
    }
}
