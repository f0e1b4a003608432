//! Tipos de evento del run y estructura `RunEvent`.
//!
//! Rol en el run:
//! - `JobRun` emite eventos a un `EventStore` append-only al ejecutar cada
//!   entry.
//! - El enum `RunEventKind` define el contrato observable del runner.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::DiagnosticLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Un entry comenzó su ejecución. No implica éxito.
    EntryStarted { entry_id: String },
    /// Diagnóstico emitido por el entry durante la ejecución.
    DiagnosticEmitted {
        entry_id: String,
        level: DiagnosticLevel,
        message: String,
    },
    /// El entry alcanzó un estado terminal.
    EntryFinished { entry_id: String, succeeded: bool },
    /// El host pidió detener el run.
    RunStopped,
}

impl RunEventKind {
    /// Entry al que pertenece el evento (`None` para eventos del run).
    pub fn entry_id(&self) -> Option<&str> {
        match self {
            RunEventKind::EntryStarted { entry_id }
            | RunEventKind::DiagnosticEmitted { entry_id, .. }
            | RunEventKind::EntryFinished { entry_id, .. } => Some(entry_id),
            RunEventKind::RunStopped => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por EventStore in-memory (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>,
}
