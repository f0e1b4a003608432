use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{RunEvent, RunEventKind};

/// Log append-only de eventos por run.
///
/// Las consultas por entry tienen implementación por defecto sobre `list`;
/// un store persistente puede sobrescribirlas con un índice propio.
pub trait EventStore {
    /// Agrega un evento y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent;

    /// Eventos del run en orden de `seq`.
    fn list(&self, run_id: Uuid) -> Vec<RunEvent>;

    /// Eventos emitidos por un entry concreto.
    fn entry_events(&self, run_id: Uuid, entry_id: &str) -> Vec<RunEvent> {
        self.list(run_id)
            .into_iter()
            .filter(|e| e.kind.entry_id() == Some(entry_id))
            .collect()
    }

    /// Resultado de la última invocación terminada del entry, si la hubo.
    fn last_result(&self, run_id: Uuid, entry_id: &str) -> Option<bool> {
        self.list(run_id).iter().rev().find_map(|e| match &e.kind {
                                           RunEventKind::EntryFinished { entry_id: id, succeeded } if id == entry_id => {
                                               Some(*succeeded)
                                           }
                                           _ => None,
                                       })
    }

    /// El host detuvo el run en algún momento.
    fn was_stopped(&self, run_id: Uuid) -> bool {
        self.list(run_id).iter().any(|e| e.kind == RunEventKind::RunStopped)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    runs: HashMap<Uuid, Vec<RunEvent>>,
}

impl InMemoryEventStore {
    /// Cantidad de runs con al menos un evento.
    pub fn run_count(&self) -> usize { self.runs.len() }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent {
        let events = self.runs.entry(run_id).or_default();
        let ev = RunEvent { seq: events.len() as u64,
                            run_id,
                            kind,
                            ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<RunEvent> { self.runs.get(&run_id).cloned().unwrap_or_default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DiagnosticLevel;

    fn finished(entry_id: &str, succeeded: bool) -> RunEventKind {
        RunEventKind::EntryFinished { entry_id: entry_id.into(),
                                      succeeded }
    }

    #[test]
    fn entry_events_filter_by_entry_and_run() {
        let mut store = InMemoryEventStore::default();
        let run = Uuid::new_v4();
        let other = Uuid::new_v4();
        store.append_kind(run, RunEventKind::EntryStarted { entry_id: "wait".into() });
        store.append_kind(run, RunEventKind::EntryStarted { entry_id: "mail".into() });
        store.append_kind(run,
                          RunEventKind::DiagnosticEmitted { entry_id: "wait".into(),
                                                            level: DiagnosticLevel::Detailed,
                                                            message: "wait time has elapsed".into() });
        store.append_kind(other, RunEventKind::EntryStarted { entry_id: "wait".into() });

        let seqs: Vec<u64> = store.entry_events(run, "wait").iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 2]);
        assert_eq!(store.run_count(), 2);
    }

    #[test]
    fn last_result_reflects_latest_invocation() {
        let mut store = InMemoryEventStore::default();
        let run = Uuid::new_v4();
        assert_eq!(store.last_result(run, "wait"), None);
        store.append_kind(run, finished("wait", true));
        store.append_kind(run, RunEventKind::RunStopped);
        store.append_kind(run, finished("wait", false));
        assert_eq!(store.last_result(run, "wait"), Some(false));
        assert!(store.was_stopped(run));
    }
}
