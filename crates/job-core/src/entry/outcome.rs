use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Nivel de un diagnóstico emitido por un entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    /// Sólo se emite con diagnósticos detallados activos.
    Detailed,
    Basic,
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn log_level(self) -> log::Level {
        match self {
            DiagnosticLevel::Detailed => log::Level::Debug,
            DiagnosticLevel::Basic => log::Level::Info,
            DiagnosticLevel::Warning => log::Level::Warn,
            DiagnosticLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self { level,
               message: message.into() }
    }
}

/// Receptor opcional de diagnósticos provisto por el host.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink que acumula en memoria (útil para hosts simples y tests).
#[derive(Debug, Default)]
pub struct CollectingSink {
    inner: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self { Self::default() }

    pub fn snapshot(&self) -> Vec<Diagnostic> { self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone() }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        // tolera locks envenenados
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).push(diagnostic.clone());
    }
}

/// Resultado de ejecutar un entry. Se crea por invocación y no se persiste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub succeeded: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl EntryOutcome {
    pub fn failed() -> Self { Self::default() }

    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn collecting_sink_survives_a_poisoned_lock() {
        let sink = Arc::new(CollectingSink::new());
        sink.emit(&Diagnostic::new(DiagnosticLevel::Warning, "before"));

        let poisoner = Arc::clone(&sink);
        let joined = std::thread::spawn(move || {
                         let _guard = poisoner.inner.lock().unwrap();
                         panic!("emitter crashed");
                     }).join();
        assert!(joined.is_err());
        assert!(sink.inner.is_poisoned());

        sink.emit(&Diagnostic::new(DiagnosticLevel::Error, "after"));
        let messages: Vec<String> = sink.snapshot().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["before", "after"]);
    }

    #[test]
    fn outcome_counts_by_level() {
        let outcome = EntryOutcome { succeeded: false,
                                     diagnostics: vec![Diagnostic::new(DiagnosticLevel::Warning, "reset"),
                                                       Diagnostic::new(DiagnosticLevel::Error, "boom")] };
        assert_eq!(outcome.count(DiagnosticLevel::Warning), 1);
        assert_eq!(outcome.count(DiagnosticLevel::Detailed), 0);
    }
}
